//! Schoolbook arbitrary-precision arithmetic over decimal digit sequences.
//!
//! # About
//! This library works one decimal place at a time, the way long-hand
//! arithmetic is done on paper. Numbers come in two shapes:
//!
//! - [`DecUint`], a heap-allocated sequence of decimal digits stored with the
//!   least significant digit first. It supports addition, subtraction,
//!   comparison, and division by a single digit with remainder.
//! - MSD-first digit strings such as `"123"`, operated on by the functions in
//!   the [`decimal`] module (padding, leading-zero stripping, subtraction).
//!
//! All values are non-negative; there is no sign. Subtraction of a larger
//! value from a smaller one is rejected with [`Error::Underflow`] rather than
//! wrapping. Division is restricted to single-digit divisors, and a zero
//! divisor is rejected with [`Error::DivisionByZero`] — the [`NonZero`]
//! wrapper makes the inner division entry point impossible to misuse.
//!
//! # Example
//! ```
//! use decimal_bignum::{DecUint, Digit, NonZero};
//!
//! let n: DecUint = "123".parse()?;
//! let nine = NonZero::new(Digit::new(9).unwrap()).unwrap();
//! let (quotient, remainder) = n.div_rem_digit(nine);
//! assert_eq!(quotient.to_string(), "13");
//! assert_eq!(remainder.get(), 6);
//! # Ok::<(), decimal_bignum::Error>(())
//! ```

#![no_std]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

mod dec_uint;
mod digit;
mod error;
mod non_zero;
mod traits;

pub mod decimal;

pub use crate::{dec_uint::DecUint, digit::Digit, error::Error, non_zero::NonZero, traits::Zero};
