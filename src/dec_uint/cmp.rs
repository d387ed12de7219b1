//! [`DecUint`] comparisons.

use core::cmp::Ordering;

use crate::DecUint;

impl Ord for DecUint {
    fn cmp(&self, rhs: &Self) -> Ordering {
        // Canonical form carries no leading zeros, so a longer sequence is
        // always the larger value; equal lengths compare digit by digit
        // from the most significant end.
        self.ndigits()
            .cmp(&rhs.ndigits())
            .then_with(|| self.as_digits().iter().rev().cmp(rhs.as_digits().iter().rev()))
    }
}

impl PartialOrd for DecUint {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
