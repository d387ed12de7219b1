//! Operations on MSD-first decimal digit strings.
//!
//! The functions in this module work on numbers written the way they appear
//! on paper: strings of ASCII digits with the most significant digit first,
//! possibly carrying leading zeros. [`normalize`] and [`strip_leading_zeros`]
//! are the explicit pre- and post-processing steps around [`subtract`];
//! `subtract` itself neither pads nor unpads.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{Digit, Error, dec_uint::sub::borrow_sub};

/// Left-pad the shorter of two digit strings with `'0'` until both have the
/// same length.
///
/// Digit characters are not validated here.
///
/// ```
/// let (a, b) = decimal_bignum::decimal::normalize("123", "23");
/// assert_eq!((a.as_str(), b.as_str()), ("123", "023"));
/// ```
pub fn normalize(a: &str, b: &str) -> (String, String) {
    let len = a.len().max(b.len());
    (pad_to(a, len), pad_to(b, len))
}

fn pad_to(s: &str, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in s.len()..len {
        out.push('0');
    }
    out.push_str(s);
    out
}

/// Strip insignificant leading `'0'` characters from a digit string.
///
/// Stops when one character remains, so every all-zero input (including
/// `"0"` itself) converges to the canonical `"0"` rather than the empty
/// string. Idempotent.
///
/// ```
/// use decimal_bignum::decimal::strip_leading_zeros;
/// assert_eq!(strip_leading_zeros("023"), "23");
/// assert_eq!(strip_leading_zeros("000"), "0");
/// ```
pub fn strip_leading_zeros(a: &str) -> &str {
    let mut a = a;
    while a.len() > 1 && a.starts_with('0') {
        a = &a[1..];
    }
    a
}

/// Subtract the decimal string `b` from the decimal string `a`.
///
/// Both operands are read MSD-first and may have different lengths or carry
/// leading zeros. The difference has exactly `max(a.len(), b.len())` digits,
/// leading zeros included — callers wanting canonical output apply
/// [`strip_leading_zeros`] themselves.
///
/// Errors with [`Error::InvalidDigit`] if either string is empty or holds a
/// non-digit character, and with [`Error::Underflow`] if `a` is numerically
/// smaller than `b`; wraparound output is never produced.
///
/// ```
/// assert_eq!(decimal_bignum::decimal::subtract("123", "23").unwrap(), "100");
/// ```
pub fn subtract(a: &str, b: &str) -> Result<String, Error> {
    let a = parse_digits(a)?;
    let b = parse_digits(b)?;

    if cmp_digits(&a, &b) == Ordering::Less {
        return Err(Error::Underflow);
    }

    let (digits, borrow) = borrow_sub(&a, &b, Digit::RADIX);
    debug_assert_eq!(borrow, 0, "no borrow can remain when a >= b");

    Ok(digits
        .iter()
        .rev()
        .map(|d| char::from(d.to_ascii()))
        .collect())
}

/// Read an MSD-first digit string into least-significant-first digits,
/// keeping any leading zeros in place.
fn parse_digits(s: &str) -> Result<Vec<Digit>, Error> {
    if s.is_empty() {
        return Err(Error::InvalidDigit);
    }
    s.bytes()
        .rev()
        .map(|c| Digit::from_ascii(c).ok_or(Error::InvalidDigit))
        .collect()
}

/// Compare two LSD-first digit sequences by numeric value, ignoring leading
/// zeros.
fn cmp_digits(a: &[Digit], b: &[Digit]) -> Ordering {
    let (a, b) = (&a[..sig_len(a)], &b[..sig_len(b)]);
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Number of digits excluding leading (most significant) zeros.
fn sig_len(digits: &[Digit]) -> usize {
    let leading = digits.iter().rev().take_while(|d| d.is_zero()).count();
    digits.len() - leading
}
