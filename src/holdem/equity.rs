use crate::core::ChartError;

use super::{ComboTable, Hole};

/// C(50, 2): how many two card combos an opponent can hold once the
/// target hand's two cards are out of the deck. Used literally as
/// the divisor; the exclusion scan covers exactly this many entries
/// when the table is complete.
pub const OPPONENT_COMBOS: f64 = 1225.0;

/// The fraction of possible opposing holdings this hand outranks.
///
/// Every combo sharing a card with the target is excluded from the
/// scan before counting combos that score strictly better or
/// exactly equal. With `include_ties` false a tie counts against
/// the hand; with it true a tie counts for it.
///
/// This is a relative rank percentile over heuristic scores, not a
/// game equity. Two distinct holdings with equal scores are
/// conflated with a true statistical tie.
///
/// # Errors
///
/// `ChartError::UnknownCombo` when the target holding has no table
/// entry. That cannot happen with a table from
/// [`ComboTable::build`], but a caller with a hand-assembled table
/// gets an error rather than a silent zero.
pub fn win_probability(
    table: &ComboTable,
    hole: Hole,
    include_ties: bool,
) -> Result<f64, ChartError> {
    let target = table
        .get(&hole)
        .ok_or(ChartError::UnknownCombo(hole.high(), hole.low()))?;

    let mut better = 0u32;
    let mut tied = 0u32;
    for (combo, score) in table.iter() {
        // Cards in the target hand are removed from the pool.
        if combo.contains(&hole.high()) || combo.contains(&hole.low()) {
            continue;
        }
        if *score > target {
            better += 1;
        } else if *score == target {
            tied += 1;
        }
    }

    let losing = if include_ties {
        f64::from(better)
    } else {
        f64::from(better + tied)
    };
    Ok(1.0 - losing / OPPONENT_COMBOS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Deck, Suit, Value};
    use crate::holdem::Scorer;
    use approx::assert_relative_eq;

    fn table() -> ComboTable {
        ComboTable::build(&Scorer::default())
    }

    #[test]
    fn test_exclusion_leaves_opponent_pool() {
        // Every combo containing As or Ah must be skipped: each
        // card pairs with 51 others and AsAh is shared, so 101 of
        // the 1326 entries go, leaving exactly C(50, 2).
        let t = table();
        let aces: Hole = "AsAh".parse().unwrap();
        let survivors = t
            .iter()
            .filter(|(combo, _)| {
                !combo.contains(&aces.high()) && !combo.contains(&aces.low())
            })
            .count();
        assert_eq!(1225, survivors);
        for (combo, _) in t.iter() {
            if combo.contains(&Card::new(Value::Ace, Suit::Spade)) {
                assert!(combo.contains(&aces.high()) || combo.contains(&aces.low()));
            }
        }
    }

    #[test]
    fn test_pocket_aces_with_ties_is_certain() {
        // Only another ace pair matches the top score. Four of the
        // five share a card and are excluded; the last one merely
        // ties, so with ties counting for the hand nothing is lost.
        let t = table();
        let aces: Hole = "AsAh".parse().unwrap();
        let p = win_probability(&t, aces, true).unwrap();
        assert_relative_eq!(1.0, p);
    }

    #[test]
    fn test_ties_flag_only_moves_ties() {
        let t = table();
        let hole: Hole = "Tc9c".parse().unwrap();
        let without = win_probability(&t, hole, false).unwrap();
        let with = win_probability(&t, hole, true).unwrap();
        assert!(with >= without);
    }

    #[test]
    fn test_bounds_for_all_starting_hands() {
        // One representative hole per grid cell: pairs, suited and
        // offsuit for every value combination.
        let t = table();
        for row in Value::descending() {
            for col in Value::descending() {
                let suit = if (row as u8) < (col as u8) {
                    Suit::Club
                } else {
                    Suit::Spade
                };
                let hole =
                    Hole::new(Card::new(col, Suit::Club), Card::new(row, suit)).unwrap();
                for include_ties in [false, true] {
                    let p = win_probability(&t, hole, include_ties).unwrap();
                    assert!((0.0..=1.0).contains(&p), "{} -> {}", hole, p);
                }
            }
        }
    }

    #[test]
    fn test_unknown_combo_errors() {
        let scorer = Scorer::default();
        let known: Hole = "AsKh".parse().unwrap();
        let missing: Hole = "2c2d".parse().unwrap();
        let partial: ComboTable = [(known, scorer.score(known))].into_iter().collect();
        assert!(win_probability(&partial, known, false).is_ok());
        assert_eq!(
            Err(ChartError::UnknownCombo(missing.high(), missing.low())),
            win_probability(&partial, missing, false)
        );
    }

    #[test]
    fn test_deck_has_expected_pool() {
        assert_eq!(52, Deck::default().len());
        assert_eq!(OPPONENT_COMBOS as usize, 50 * 49 / 2);
    }
}
