use std::fmt;
use std::str::FromStr;

use crate::core::{Card, ChartError, Suit, Value};

/// A player's two private hole cards.
///
/// The pair is unordered: the constructor stores the higher card
/// first so that `(a, b)` and `(b, a)` are the same `Hole` and hash
/// to the same combo table entry. The two cards are always distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hole {
    high: Card,
    low: Card,
}

impl Hole {
    /// Canonicalize two cards into a hole.
    ///
    /// # Errors
    ///
    /// The same physical card twice is not a holding anyone can be
    /// dealt, so that's `ChartError::DuplicateCardInHole`.
    ///
    /// # Examples
    ///
    /// ```
    /// use range_chart::core::{Card, Suit, Value};
    /// use range_chart::holdem::Hole;
    ///
    /// let ak = Hole::new(
    ///     Card::new(Value::King, Suit::Heart),
    ///     Card::new(Value::Ace, Suit::Spade),
    /// )
    /// .unwrap();
    /// assert_eq!(Value::Ace, ak.high().value);
    /// ```
    pub fn new(c1: Card, c2: Card) -> Result<Self, ChartError> {
        if c1 == c2 {
            return Err(ChartError::DuplicateCardInHole(c1));
        }
        let (high, low) = if c1 >= c2 { (c1, c2) } else { (c2, c1) };
        Ok(Self { high, low })
    }

    /// The higher of the two cards (by value, then suit).
    pub fn high(&self) -> Card {
        self.high
    }

    /// The lower of the two cards.
    pub fn low(&self) -> Card {
        self.low
    }

    /// Is the given card one of the two?
    pub fn contains(&self, c: &Card) -> bool {
        self.high == *c || self.low == *c
    }

    /// Is this a pocket pair?
    pub fn is_pair(&self) -> bool {
        self.high.value == self.low.value
    }

    /// Do both cards share a suit?
    pub fn suited(&self) -> bool {
        self.high.suit == self.low.suit
    }

    /// The value-level notation for this holding: `"AA"`, `"AKs"`
    /// or `"AKo"`.
    pub fn notation(&self) -> String {
        let high = self.high.value.to_char();
        let low = self.low.value.to_char();
        if self.is_pair() {
            format!("{}{}", high, low)
        } else if self.suited() {
            format!("{}{}s", high, low)
        } else {
            format!("{}{}o", high, low)
        }
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high, self.low)
    }
}

impl FromStr for Hole {
    type Err = ChartError;

    /// Parse four character notation such as `"AsKh"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let mut cards: Vec<Card> = Vec::with_capacity(2);
        while let Some(vc) = chars.next() {
            let sc = chars.next();
            let value = Value::from_char(vc).ok_or(ChartError::UnexpectedValueChar)?;
            let suit = sc
                .and_then(Suit::from_char)
                .ok_or(ChartError::UnexpectedSuitChar)?;
            cards.push(Card { value, suit });
            if cards.len() == 2 {
                break;
            }
        }
        if chars.next().is_some() {
            return Err(ChartError::UnparsedCharsRemaining);
        }
        match cards[..] {
            [c1, c2] => Self::new(c1, c2),
            _ => Err(ChartError::TooFewChars),
        }
    }
}
