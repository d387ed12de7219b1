//! Error types.

use core::fmt;

/// The failure result for decimal arithmetic operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Attempted division by zero.
    DivisionByZero,

    /// The divisor is not a single digit (it is `>= 10`).
    DivisorOutOfRange,

    /// A digit position held a non-digit character or an out-of-range value.
    InvalidDigit,

    /// Subtraction of a larger value from a smaller one.
    Underflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::DivisorOutOfRange => write!(f, "divisor is not a single digit"),
            Self::InvalidDigit => write!(f, "invalid decimal digit"),
            Self::Underflow => write!(f, "subtraction underflow"),
        }
    }
}

impl core::error::Error for Error {}
