use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot parse an empty string as a number")]
    Empty,
    #[error("invalid digit {found:?} at byte {index}")]
    InvalidDigit { index: usize, found: char },
    /// The subtrahend is numerically larger than the minuend.
    #[error("subtraction would go below zero")]
    PrecisionUnderflow,
}
