//! [`DecUint`] subtraction operations.

use alloc::vec::Vec;
use core::ops::{Sub, SubAssign};

use crate::{DecUint, Digit, Error};

/// Subtract `rhs` from `lhs` digit by digit, propagating the borrow from the
/// least significant position upward.
///
/// Each partial difference is reduced with a true (floored) modulo, so the
/// stored digit is always non-negative and the borrow carried to the next
/// position is `0` or `-1`. Operands may have different lengths; the result
/// always has `max(lhs.len(), rhs.len())` digits, leading zeros included.
///
/// Returns the digits along with the final borrow, which is `0` exactly when
/// `lhs >= rhs`. Callers are responsible for rejecting a non-zero borrow; the
/// loop itself never fails.
pub(crate) fn borrow_sub(lhs: &[Digit], rhs: &[Digit], base: u16) -> (Vec<Digit>, i16) {
    debug_assert!(base <= Digit::RADIX);
    let base = base as i16;
    let mut result = Vec::with_capacity(lhs.len().max(rhs.len()));
    let mut borrow: i16 = 0;
    let mut i = 0;

    while i < lhs.len() || i < rhs.len() {
        let part = match (lhs.get(i), rhs.get(i)) {
            (Some(a), Some(b)) => i16::from(a.0) - i16::from(b.0) + borrow,
            (Some(a), None) => i16::from(a.0) + borrow,
            (None, Some(b)) => -i16::from(b.0) + borrow,
            (None, None) => break,
        };
        result.push(Digit(part.rem_euclid(base) as u8));
        borrow = part.div_euclid(base);
        i += 1;
    }

    (result, borrow)
}

impl DecUint {
    /// Computes `self - rhs`, returning [`Error::Underflow`] if `rhs` is
    /// greater than `self`.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, Error> {
        if self < rhs {
            return Err(Error::Underflow);
        }
        let (digits, borrow) = borrow_sub(self.as_digits(), rhs.as_digits(), Digit::RADIX);
        debug_assert_eq!(borrow, 0, "no borrow can remain when self >= rhs");
        Ok(Self::from_digit_vec(digits))
    }
}

impl Sub<&DecUint> for &DecUint {
    type Output = DecUint;

    fn sub(self, rhs: &DecUint) -> DecUint {
        self.checked_sub(rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl Sub for DecUint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Sub<&Self> for DecUint {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self {
        &self - rhs
    }
}

impl SubAssign<&Self> for DecUint {
    fn sub_assign(&mut self, rhs: &Self) {
        *self = &*self - rhs;
    }
}

impl SubAssign for DecUint {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}
