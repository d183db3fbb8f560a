use std::collections::HashMap;
use std::collections::hash_map::Iter;

use tracing::event;

use crate::core::Deck;

use super::{Hole, Scorer};

/// C(52, 2): the number of distinct two card holdings in a full
/// deck.
pub const ALL_COMBOS: usize = 1326;

/// Every distinct two card combo from the full deck, mapped to its
/// heuristic score.
///
/// Built once and shared read-only; the contents depend only on the
/// deck and the scorer, never on the hand being queried.
#[derive(Debug, Clone)]
pub struct ComboTable {
    scores: HashMap<Hole, f64>,
}

impl ComboTable {
    /// Enumerate every ordered pair of cards from two full deck
    /// passes, skip same-card pairs, and score each combo once
    /// under its canonical key.
    ///
    /// # Examples
    ///
    /// ```
    /// use range_chart::holdem::{ComboTable, Scorer};
    ///
    /// let table = ComboTable::build(&Scorer::default());
    /// assert_eq!(1326, table.len());
    /// ```
    pub fn build(scorer: &Scorer) -> Self {
        let deck = Deck::default();
        let mut scores: HashMap<Hole, f64> = HashMap::with_capacity(ALL_COMBOS);
        for c1 in deck.iter() {
            for c2 in deck.iter() {
                // Same physical card twice is not a combo.
                let Ok(hole) = Hole::new(*c1, *c2) else {
                    continue;
                };
                scores.entry(hole).or_insert_with(|| scorer.score(hole));
            }
        }
        event!(
            tracing::Level::DEBUG,
            combos = scores.len(),
            "combo table built"
        );
        Self { scores }
    }

    /// Look up the score for a holding. Both card orderings hit the
    /// same entry since `Hole` is canonical.
    pub fn get(&self, hole: &Hole) -> Option<f64> {
        self.scores.get(hole).copied()
    }

    /// How many combos are in the table.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over every combo and its score.
    pub fn iter(&self) -> Iter<'_, Hole, f64> {
        self.scores.iter()
    }
}

/// Assemble a table from explicit entries. Lookups against combos
/// that were never inserted report `UnknownCombo` downstream.
impl FromIterator<(Hole, f64)> for ComboTable {
    fn from_iter<I: IntoIterator<Item = (Hole, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Suit, Value};

    #[test_log::test]
    fn test_full_coverage() {
        let table = ComboTable::build(&Scorer::default());
        assert_eq!(ALL_COMBOS, table.len());
    }

    #[test]
    fn test_symmetric_lookup() {
        let table = ComboTable::build(&Scorer::default());
        let a = Card::new(Value::Ace, Suit::Spade);
        let k = Card::new(Value::King, Suit::Heart);
        let ak = Hole::new(a, k).unwrap();
        let ka = Hole::new(k, a).unwrap();
        assert_eq!(table.get(&ak), table.get(&ka));
        assert!(table.get(&ak).is_some());
    }

    #[test]
    fn test_every_deck_pair_present() {
        let table = ComboTable::build(&Scorer::default());
        let deck = Deck::default();
        for c1 in deck.iter() {
            for c2 in deck.iter() {
                if let Ok(hole) = Hole::new(*c1, *c2) {
                    assert!(table.get(&hole).is_some(), "missing {}", hole);
                }
            }
        }
    }
}
