use crate::core::Value;

use super::Hole;

/// Every pair is worth at least this much, no matter how low the
/// rank.
const PAIR_FLOOR: f64 = 5.0;

/// Heuristic point value for each card value.
///
/// The table is monotonically decreasing as values drop, with the
/// half point steps starting between Ten and Nine. Reproduced
/// literally; the absolute numbers only matter relative to each
/// other.
#[derive(Debug, Clone)]
pub struct RankPoints([f64; 13]);

impl RankPoints {
    /// The standard table: A=10, K=8, Q=7, J=6, T=5, then 4.5 down
    /// to 1 in half point steps.
    pub fn standard() -> Self {
        let mut points = [0.0; 13];
        for v in Value::values() {
            points[v as usize] = match v {
                Value::Ace => 10.0,
                Value::King => 8.0,
                Value::Queen => 7.0,
                Value::Jack => 6.0,
                Value::Ten => 5.0,
                Value::Nine => 4.5,
                Value::Eight => 4.0,
                Value::Seven => 3.5,
                Value::Six => 3.0,
                Value::Five => 2.5,
                Value::Four => 2.0,
                Value::Three => 1.5,
                Value::Two => 1.0,
            };
        }
        Self(points)
    }

    /// Look up the point value for a single card value.
    pub fn point(&self, v: Value) -> f64 {
        self.0[v as usize]
    }
}

impl Default for RankPoints {
    fn default() -> Self {
        Self::standard()
    }
}

/// Assigns a relative strength score to a two card holding.
///
/// Scores are only ever compared against each other; they are not
/// probabilities or equities.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    points: RankPoints,
}

impl Scorer {
    pub fn new(points: RankPoints) -> Self {
        Self { points }
    }

    /// Score a holding.
    ///
    /// Pairs score `max(5, 2 * point)` and take no further
    /// adjustment. Everything else starts from the higher card's
    /// point value, gains 2 when suited, loses the gap penalty, and
    /// gains 1 more when near-connected with both cards below Ten.
    /// Non-pair scores are rounded to whole numbers.
    pub fn score(&self, hole: Hole) -> f64 {
        let (high, low) = (hole.high(), hole.low());
        let base = self
            .points
            .point(high.value)
            .max(self.points.point(low.value));

        if hole.is_pair() {
            return (base * 2.0).max(PAIR_FLOOR);
        }

        let mut score = base;
        if hole.suited() {
            score += 2.0;
        }

        let penalty = gap_penalty(high.value.gap(low.value));
        score -= penalty;

        // Low connectors and one-gappers can still make straights
        // without a face card, reward that a little.
        if penalty < 2.0 && high.value < Value::Ten && low.value < Value::Ten {
            score += 1.0;
        }

        score.round()
    }
}

/// Penalty for the number of values strictly between the two cards.
fn gap_penalty(gap: u8) -> f64 {
    match gap {
        0 => 0.0,
        1 => 1.0,
        2 => 2.0,
        3 => 4.0,
        _ => 5.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holdem::Hole;

    fn score_of(s: &str) -> f64 {
        Scorer::default().score(s.parse::<Hole>().unwrap())
    }

    #[test]
    fn test_points_decrease_with_value() {
        let points = RankPoints::standard();
        let descending = Value::descending();
        assert!(descending
            .windows(2)
            .all(|w| points.point(w[0]) > points.point(w[1])));
        assert_eq!(10.0, points.point(Value::Ace));
        assert_eq!(1.0, points.point(Value::Two));
    }

    #[test]
    fn test_pair_floor() {
        // A pair of twos is worth 5 even though 2 * 1 is only 2.
        assert_eq!(5.0, score_of("2s2h"));
        assert_eq!(5.0, score_of("5s5h"));
        assert_eq!(9.0, score_of("9s9h"));
        assert_eq!(20.0, score_of("AsAh"));
    }

    #[test]
    fn test_pair_takes_no_suited_or_gap_adjustment() {
        assert_eq!(score_of("KsKh"), score_of("KdKc"));
    }

    #[test]
    fn test_gap_monotonicity() {
        // Fixed high card, same suits, no connector bonus in reach.
        let scores: Vec<f64> = ["AsKh", "AsQh", "AsJh", "AsTh", "As9h"]
            .iter()
            .map(|s| score_of(s))
            .collect();
        assert!(scores.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_suited_bonus() {
        assert_eq!(score_of("AhKh"), score_of("AsKh") + 2.0);
        assert_eq!(score_of("9c6c"), score_of("9c6d") + 2.0);
    }

    #[test]
    fn test_connector_bonus_boundary() {
        // 6-7 is adjacent with both cards below Ten: base 3.5 + 1,
        // rounded up.
        assert_eq!(5.0, score_of("6s7h"));
        assert_eq!(7.0, score_of("6s7s"));
        // T-J is adjacent but Ten is not below Ten, no bonus.
        assert_eq!(6.0, score_of("TsJh"));
        assert_eq!(8.0, score_of("TsJs"));
        // 9-T: the Ten disqualifies the bonus even though the nine
        // is low.
        assert_eq!(5.0, score_of("9sTh"));
    }

    #[test]
    fn test_gap_penalty_tiers() {
        assert_eq!(0.0, gap_penalty(0));
        assert_eq!(1.0, gap_penalty(1));
        assert_eq!(2.0, gap_penalty(2));
        assert_eq!(4.0, gap_penalty(3));
        assert_eq!(5.0, gap_penalty(4));
        assert_eq!(5.0, gap_penalty(11));
    }

    #[test]
    fn test_rounding() {
        // 9-7 offsuit: base 4.5, gap 1 penalty 1, connector bonus 1
        // -> 4.5 rounds to 5 away from zero.
        assert_eq!(5.0, score_of("9s7h"));
        // 9-6 offsuit: base 4.5, gap 2 penalty 2 -> 2.5 rounds to 3.
        assert_eq!(3.0, score_of("9s6h"));
    }
}
