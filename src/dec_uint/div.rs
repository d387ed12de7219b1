//! [`DecUint`] division by a single digit.

use alloc::vec;
use alloc::vec::Vec;

use crate::{DecUint, Digit, Error, NonZero};

/// Schoolbook long division of a digit sequence by a single digit.
///
/// The dividend is stored least significant digit first, but long division
/// consumes digits from the most significant end, so the loop walks the
/// slice in reverse. At each position the running remainder `d` is shifted
/// up by one place, the next quotient digit is `d / divisor`, and what is
/// left of `d` carries down to the next position. After the last (least
/// significant) position, `d` is the remainder of the whole division.
///
/// Each quotient digit fits the base: `d` never exceeds
/// `(divisor - 1) * base + (base - 1)`, so `d / divisor < base`.
pub(crate) fn div_rem_digit(dividend: &[Digit], divisor: Digit, base: u16) -> (Vec<Digit>, Digit) {
    debug_assert!(!divisor.is_zero());

    let divisor = u16::from(divisor.0);
    let mut quotient = vec![Digit::ZERO; dividend.len()];
    let mut d: u16 = 0;

    for i in (0..dividend.len()).rev() {
        d = d * base + u16::from(dividend[i].0);
        let n = d / divisor;
        quotient[i] = Digit(n as u8);
        d -= n * divisor;
    }

    // A canonical dividend can leave at most one leading zero on the
    // quotient (when its top digit is smaller than the divisor), so a single
    // trim restores canonical form.
    if quotient.len() > 1 && quotient.last() == Some(&Digit::ZERO) {
        quotient.pop();
    }

    (quotient, Digit(d as u8))
}

impl DecUint {
    /// Computes `self / rhs` for a single-digit divisor, returning the
    /// quotient and remainder.
    ///
    /// The divisor is statically non-zero, so this operation cannot fail.
    /// The remainder is always in `0..rhs`.
    pub fn div_rem_digit(&self, rhs: NonZero<Digit>) -> (Self, Digit) {
        let (quotient, remainder) = div_rem_digit(self.as_digits(), rhs.get(), Digit::RADIX);
        (Self { digits: quotient }, remainder)
    }

    /// Computes `self / rhs` for a raw divisor value, validating it first.
    ///
    /// Returns [`Error::DivisorOutOfRange`] if `rhs >= 10` and
    /// [`Error::DivisionByZero`] if `rhs == 0`.
    pub fn checked_div_rem_digit(&self, rhs: u8) -> Result<(Self, Digit), Error> {
        let divisor = Digit::new(rhs).ok_or(Error::DivisorOutOfRange)?;
        let divisor = NonZero::new(divisor).ok_or(Error::DivisionByZero)?;
        Ok(self.div_rem_digit(divisor))
    }
}
