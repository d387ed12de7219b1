//! [`DecUint`] addition operations.

use alloc::vec::Vec;
use core::ops::{Add, AddAssign};

use crate::{DecUint, Digit};

/// Add two digit sequences, propagating the carry from the least significant
/// position upward.
///
/// Operands may have different lengths and need not be canonical. The result
/// has `max(lhs.len(), rhs.len())` digits plus a final carry digit if one is
/// left over.
pub(crate) fn carry_add(lhs: &[Digit], rhs: &[Digit], base: u16) -> Vec<Digit> {
    let mut result = Vec::with_capacity(lhs.len().max(rhs.len()) + 1);
    let mut carry: u16 = 0;
    let mut i = 0;

    while i < lhs.len() || i < rhs.len() {
        let part = match (lhs.get(i), rhs.get(i)) {
            (Some(a), Some(b)) => u16::from(a.0) + u16::from(b.0) + carry,
            (Some(a), None) => u16::from(a.0) + carry,
            (None, Some(b)) => u16::from(b.0) + carry,
            (None, None) => break,
        };
        result.push(Digit((part % base) as u8));
        carry = part / base;
        i += 1;
    }

    if carry != 0 {
        result.push(Digit(carry as u8));
    }

    result
}

impl Add<&DecUint> for &DecUint {
    type Output = DecUint;

    fn add(self, rhs: &DecUint) -> DecUint {
        let digits = carry_add(self.as_digits(), rhs.as_digits(), Digit::RADIX);
        DecUint::from_digit_vec(digits)
    }
}

impl Add for DecUint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Add<&Self> for DecUint {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self {
        &self + rhs
    }
}

impl AddAssign<&Self> for DecUint {
    fn add_assign(&mut self, rhs: &Self) {
        *self = &*self + rhs;
    }
}

impl AddAssign for DecUint {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}
