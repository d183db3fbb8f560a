use std::fmt;

use tracing::event;

use crate::core::{Card, ChartError, Suit, Value};

use super::equity::win_probability;
use super::position::{self, Position};
use super::{ComboTable, Hole};

/// Inner width of one grid cell.
const CELL_WIDTH: usize = 6;

/// Total width of a rendered row: the row label gutter, thirteen
/// bordered cells, and the closing border.
const GRID_WIDTH: usize = 3 + 13 * (CELL_WIDTH + 1) + 1;

/// A computed 13x13 chart of projected win percentages, indexed by
/// value high-to-low on both axes.
///
/// The diagonal holds the pocket pairs. For each row, cells up to
/// and including the diagonal use offsuit representative cards and
/// cells past it use suited ones, so the suited triangle is the one
/// after the pair in traversal order.
#[derive(Debug, Clone)]
pub struct RangeChart {
    position_label: String,
    cells: [[f64; 13]; 13],
}

impl RangeChart {
    /// Fill the grid for a seat label. The label decides only the
    /// projection exponent; unrecognized labels render unprojected.
    pub fn compute(
        table: &ComboTable,
        position_label: &str,
        include_ties: bool,
    ) -> Result<Self, ChartError> {
        let exponent = Position::exponent_for(position_label);
        let values = Value::descending();
        let mut cells = [[0.0; 13]; 13];

        for (ri, row) in values.iter().enumerate() {
            let mut offsuit = true;
            for (ci, col) in values.iter().enumerate() {
                let row_suit = if offsuit { Suit::Spade } else { Suit::Club };
                let hole = Hole::new(
                    Card::new(*col, Suit::Club),
                    Card::new(*row, row_suit),
                )?;
                let p = win_probability(table, hole, include_ties)?;
                cells[ri][ci] = position::project(p, exponent) * 100.0;
                if col == row {
                    offsuit = false;
                }
            }
        }

        event!(
            tracing::Level::DEBUG,
            position = position_label,
            exponent,
            include_ties,
            "range chart computed"
        );

        Ok(Self {
            position_label: position_label.to_string(),
            cells,
        })
    }

    /// The label the chart was computed for, as given.
    pub fn position_label(&self) -> &str {
        &self.position_label
    }

    /// One projected percentage. Row and column index the
    /// descending value order, so `(0, 0)` is the ace pair.
    pub fn cell(&self, row: usize, col: usize) -> f64 {
        self.cells[row][col]
    }
}

fn write_border(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:3}", "")?;
    for _ in 0..13 {
        write!(f, "+{}", "-".repeat(CELL_WIDTH))?;
    }
    writeln!(f, "+")
}

impl fmt::Display for RangeChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!("Range chart for {}", self.position_label);
        let pad = GRID_WIDTH.saturating_sub(title.len()) / 2;
        writeln!(f, "{:pad$}{}", "", title)?;
        writeln!(f)?;

        let values = Value::descending();

        write!(f, " ")?;
        for v in &values {
            write!(f, "{:>width$}", v.to_char(), width = CELL_WIDTH + 1)?;
        }
        writeln!(f)?;
        write_border(f)?;

        for (ri, row) in values.iter().enumerate() {
            write!(f, "{:>2} |", row.to_char())?;
            for ci in 0..values.len() {
                write!(f, " {:4.1} |", self.cells[ri][ci])?;
            }
            writeln!(f)?;
            write_border(f)?;
        }
        Ok(())
    }
}
