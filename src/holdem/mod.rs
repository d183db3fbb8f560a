/// Module with the canonical two card holding.
mod hole;
/// Export `Hole`
pub use self::hole::Hole;

/// Module with the rank point table and the heuristic scorer.
mod score;
/// Export `RankPoints` and `Scorer`
pub use self::score::{RankPoints, Scorer};

/// Module that enumerates and scores every combo.
mod combos;
/// Export `ComboTable`
pub use self::combos::{ComboTable, ALL_COMBOS};

/// Module with the relative rank estimate.
mod equity;
/// Export the estimator and its fixed divisor.
pub use self::equity::{win_probability, OPPONENT_COMBOS};

/// Module with seat positions and projection.
mod position;
/// Export `Position` and `project`
pub use self::position::{project, Position};

/// Module that computes and renders the 13x13 chart.
mod chart;
/// Export `RangeChart`
pub use self::chart::RangeChart;
