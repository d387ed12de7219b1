//! Single decimal digits, the building block of [`DecUint`][`crate::DecUint`].

use core::fmt;

use crate::Zero;

/// A single decimal digit in the range `0..=9`.
///
/// This is the one-place analog of a machine-word limb: every multi-digit
/// operation in this crate is expressed as a loop over `Digit` values with a
/// carry or borrow threaded between positions.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Digit(pub(crate) u8);

impl Digit {
    /// The value `0`.
    pub const ZERO: Self = Self(0);

    /// The value `1`.
    pub const ONE: Self = Self(1);

    /// Maximum digit value.
    pub const MAX: Self = Self(9);

    /// The numeral base. Digits are always in `0..RADIX`.
    pub const RADIX: u16 = 10;

    /// Create a digit from an integer value.
    ///
    /// Returns `None` if `value` is not in `0..=9`.
    pub const fn new(value: u8) -> Option<Self> {
        if (value as u16) < Self::RADIX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a digit from an ASCII character.
    ///
    /// Returns `None` unless `c` is in `b'0'..=b'9'`.
    pub const fn from_ascii(c: u8) -> Option<Self> {
        match c {
            b'0'..=b'9' => Some(Self(c - b'0')),
            _ => None,
        }
    }

    /// The ASCII character for this digit.
    pub const fn to_ascii(self) -> u8 {
        b'0' + self.0
    }

    /// The integer value of this digit.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Is this digit zero?
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Zero for Digit {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        (*self).is_zero()
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Digit;

    #[test]
    fn new_in_range() {
        assert_eq!(Digit::new(0), Some(Digit::ZERO));
        assert_eq!(Digit::new(9), Some(Digit::MAX));
    }

    #[test]
    fn new_out_of_range() {
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::new(u8::MAX), None);
    }

    #[test]
    fn ascii_round_trip() {
        for value in 0..=9u8 {
            let digit = Digit::new(value).unwrap();
            assert_eq!(Digit::from_ascii(digit.to_ascii()), Some(digit));
        }
    }

    #[test]
    fn from_ascii_rejects_non_digits() {
        assert_eq!(Digit::from_ascii(b'a'), None);
        assert_eq!(Digit::from_ascii(b' '), None);
        assert_eq!(Digit::from_ascii(b'0' - 1), None);
        assert_eq!(Digit::from_ascii(b'9' + 1), None);
    }
}
