//! Traits shared by the numeric types in this crate.

/// Values which have a zero representation.
pub trait Zero: Sized {
    /// The zero value for this type.
    fn zero() -> Self;

    /// Is this value zero?
    fn is_zero(&self) -> bool;
}
