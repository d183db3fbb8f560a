//! range_chart estimates the relative strength of every two card
//! holdem starting hand and renders the result as a 13x13 chart of
//! win percentages by table position.
//!
//! The estimate is a heuristic rank percentile over all 1326
//! combos, not a simulated equity: deterministic, fast, and close
//! enough to sort starting hands by.

/// Allow all the core card functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
