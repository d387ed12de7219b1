//! Heap-allocated big unsigned integers over decimal digits.

mod add;
mod cmp;
mod div;
mod encoding;
pub(crate) mod sub;

use alloc::vec::Vec;

use crate::{Digit, Error, Zero};

/// Heap-allocated big unsigned integer in decimal digit representation.
///
/// Digits are stored from least significant to most significant, so
/// `123` is held as `[3, 2, 1]`.
///
/// Values are kept in canonical form: the most significant stored digit is
/// non-zero, except for zero itself which is the single digit `0`. Every
/// constructor enforces this, so the digit slice read back through
/// [`DecUint::as_digits`] never carries superfluous leading zeros and is
/// never empty.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct DecUint {
    /// Digits from least significant to most significant.
    digits: Vec<Digit>,
}

impl DecUint {
    /// Get the value `0`.
    pub fn zero() -> Self {
        Self {
            digits: alloc::vec![Digit::ZERO],
        }
    }

    /// Get the value `1`.
    pub fn one() -> Self {
        Self {
            digits: alloc::vec![Digit::ONE],
        }
    }

    /// Create a [`DecUint`] from raw digit values, least significant first.
    ///
    /// Every value must be in `0..=9`, otherwise [`Error::InvalidDigit`] is
    /// returned. Superfluous leading (most significant) zeros are stripped;
    /// an empty sequence yields zero.
    pub fn from_digits(digits: impl IntoIterator<Item = u8>) -> Result<Self, Error> {
        let digits = digits
            .into_iter()
            .map(|d| Digit::new(d).ok_or(Error::InvalidDigit))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_digit_vec(digits))
    }

    /// Assemble a value from already-validated digits, restoring the
    /// canonical-form invariant.
    pub(crate) fn from_digit_vec(mut digits: Vec<Digit>) -> Self {
        while digits.len() > 1 && digits.last() == Some(&Digit::ZERO) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(Digit::ZERO);
        }
        Self { digits }
    }

    /// Borrow the digits of this value, least significant first.
    pub fn as_digits(&self) -> &[Digit] {
        &self.digits
    }

    /// The number of significant decimal digits.
    pub fn ndigits(&self) -> usize {
        self.digits.len()
    }

    /// Is this value zero?
    pub fn is_zero(&self) -> bool {
        self.digits == [Digit::ZERO]
    }
}

impl Zero for DecUint {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }
}

impl Default for DecUint {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for DecUint {
    fn from(mut value: u64) -> Self {
        let mut digits = Vec::new();
        loop {
            digits.push(Digit((value % u64::from(Digit::RADIX)) as u8));
            value /= u64::from(Digit::RADIX);
            if value == 0 {
                break;
            }
        }
        Self { digits }
    }
}

impl From<Digit> for DecUint {
    fn from(digit: Digit) -> Self {
        Self {
            digits: alloc::vec![digit],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DecUint;
    use crate::{Digit, Error};

    #[test]
    fn zero_is_single_digit() {
        let zero = DecUint::zero();
        assert_eq!(zero.as_digits(), [Digit::ZERO]);
        assert!(zero.is_zero());
    }

    #[test]
    fn from_digits_strips_leading_zeros() {
        let n = DecUint::from_digits([3, 2, 1, 0, 0]).unwrap();
        assert_eq!(n, DecUint::from(123u64));
    }

    #[test]
    fn from_digits_all_zero_is_canonical() {
        let n = DecUint::from_digits([0, 0, 0]).unwrap();
        assert!(n.is_zero());
        assert_eq!(n.ndigits(), 1);
    }

    #[test]
    fn from_digits_empty_is_zero() {
        assert!(DecUint::from_digits([]).unwrap().is_zero());
    }

    #[test]
    fn from_digits_rejects_out_of_range() {
        assert_eq!(DecUint::from_digits([3, 10]), Err(Error::InvalidDigit));
    }

    #[test]
    fn from_u64() {
        assert_eq!(DecUint::from(0u64), DecUint::zero());
        let n = DecUint::from(907u64);
        assert_eq!(
            n.as_digits(),
            [Digit(7), Digit(0), Digit(9)],
            "least significant digit first"
        );
    }
}
