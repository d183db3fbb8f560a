use clap::Parser;

use range_chart::core::ChartError;
use range_chart::holdem::{ComboTable, Position, RangeChart, Scorer};

#[derive(Parser)]
#[command(author, version)]
#[command(name = "range-chart")]
#[command(about = "Print a preflop win percentage chart for a table position")]
struct Cli {
    /// Position to chart: sb, d, co, hj, lj, utg2, utg1, utg.
    /// Anything else prints the unprojected chart.
    #[arg(short, long, default_value = "sb")]
    pos: String,

    /// Include ties in the probability calculation
    #[arg(short = 't', long)]
    include_ties: bool,
}

fn main() -> Result<(), ChartError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(
        pos = %cli.pos,
        exponent = Position::exponent_for(&cli.pos),
        include_ties = cli.include_ties,
        "computing chart"
    );

    let table = ComboTable::build(&Scorer::default());
    let chart = RangeChart::compute(&table, &cli.pos, cli.include_ties)?;
    print!("{}", chart);
    Ok(())
}
