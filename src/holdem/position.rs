use std::fmt;

/// Table seat, ordered from the last to act before the flop to the
/// first.
///
/// Each seat carries the number of opponents still to be beaten
/// from there, which is the exponent used to project a single
/// hand-vs-hand probability across the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// sb
    SmallBlind,
    /// d
    Dealer,
    /// co
    CutOff,
    /// hj
    HiJack,
    /// lj
    LoJack,
    /// utg2
    UnderTheGun2,
    /// utg1
    UnderTheGun1,
    /// utg
    UnderTheGun,
}

/// All of the positions, nearest-to-act first.
const POSITIONS: [Position; 8] = [
    Position::SmallBlind,
    Position::Dealer,
    Position::CutOff,
    Position::HiJack,
    Position::LoJack,
    Position::UnderTheGun2,
    Position::UnderTheGun1,
    Position::UnderTheGun,
];

impl Position {
    /// Provide all the positions that there are.
    pub fn positions() -> [Position; 8] {
        POSITIONS
    }

    /// Parse a seat label, case-insensitively. `None` for anything
    /// that is not one of the eight labels.
    pub fn from_label(label: &str) -> Option<Position> {
        match label.to_ascii_lowercase().as_str() {
            "sb" => Some(Position::SmallBlind),
            "d" => Some(Position::Dealer),
            "co" => Some(Position::CutOff),
            "hj" => Some(Position::HiJack),
            "lj" => Some(Position::LoJack),
            "utg2" => Some(Position::UnderTheGun2),
            "utg1" => Some(Position::UnderTheGun1),
            "utg" => Some(Position::UnderTheGun),
            _ => None,
        }
    }

    /// The canonical lower-case label.
    pub fn label(self) -> &'static str {
        match self {
            Position::SmallBlind => "sb",
            Position::Dealer => "d",
            Position::CutOff => "co",
            Position::HiJack => "hj",
            Position::LoJack => "lj",
            Position::UnderTheGun2 => "utg2",
            Position::UnderTheGun1 => "utg1",
            Position::UnderTheGun => "utg",
        }
    }

    /// How many opponent hands have to be outranked from this seat.
    pub fn opponents(self) -> u32 {
        match self {
            Position::SmallBlind => 1,
            Position::Dealer => 2,
            Position::CutOff => 3,
            Position::HiJack => 4,
            Position::LoJack => 5,
            Position::UnderTheGun2 => 6,
            Position::UnderTheGun1 => 7,
            Position::UnderTheGun => 8,
        }
    }

    /// The projection exponent for a label. Unrecognized or empty
    /// labels mean no projection, exponent 1.
    pub fn exponent_for(label: &str) -> u32 {
        Self::from_label(label).map_or(1, Self::opponents)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raise a single-opponent probability to the seat's opponent
/// count, treating each opponent comparison as independent. The
/// opponents' holdings aren't truly independent under shared card
/// removal; the heuristic accepts that.
pub fn project(p: f64, exponent: u32) -> f64 {
    p.powi(exponent as i32)
}
