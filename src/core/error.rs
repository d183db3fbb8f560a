use thiserror::Error;

use super::Card;

/// This is the error type for the whole crate. It uses
/// `thiserror` to provide readable error messages
#[derive(Error, Debug, Hash, PartialEq, Eq)]
pub enum ChartError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card {0} used twice in a hole")]
    DuplicateCardInHole(Card),
    #[error("Combo {0}{1} is missing from the combo table")]
    UnknownCombo(Card, Card),
}
