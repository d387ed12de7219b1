//! Wrapper type for non-zero values.

use core::{fmt, ops::Deref};

use crate::{Digit, Zero};

/// Wrapper type for non-zero values.
///
/// Used as the divisor type of the inner division entry points, so that a
/// zero divisor is rejected when the wrapper is constructed rather than
/// checked inside the arithmetic.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NonZero<T>(pub(crate) T);

impl<T> NonZero<T> {
    /// Create a new non-zero value, returning `None` if it is zero.
    pub fn new(n: T) -> Option<Self>
    where
        T: Zero,
    {
        if n.is_zero() { None } else { Some(Self(n)) }
    }

    /// Provides access to the contents of `NonZero` in a `const` context.
    pub const fn as_ref(&self) -> &T {
        &self.0
    }

    /// Returns the inner value.
    pub fn get(self) -> T {
        self.0
    }
}

impl NonZero<Digit> {
    /// Creates a new non-zero digit in a const context.
    /// Panics if the value is zero.
    pub const fn new_unwrap(n: Digit) -> Self {
        if n.is_zero() {
            panic!("Invalid value: zero")
        } else {
            Self(n)
        }
    }
}

impl<T> AsRef<T> for NonZero<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for NonZero<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Display> fmt::Display for NonZero<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::NonZero;
    use crate::Digit;

    #[test]
    fn new_rejects_zero() {
        assert_eq!(NonZero::new(Digit::ZERO), None);
    }

    #[test]
    fn new_accepts_nonzero() {
        let nz = NonZero::new(Digit::MAX).unwrap();
        assert_eq!(nz.get(), Digit::MAX);
    }

    #[test]
    fn new_unwrap_const() {
        const NINE: NonZero<Digit> = NonZero::new_unwrap(Digit::MAX);
        assert_eq!(NINE.get().get(), 9);
    }
}
