//! Integration tests for the MSD-first digit string surface.

use decimal_bignum::decimal::{normalize, strip_leading_zeros, subtract};
use decimal_bignum::{DecUint, Error};

#[test]
fn normalize_then_strip() {
    let (a, b) = normalize("123", "23");
    assert_eq!(a, "123");
    assert_eq!(b, "023");
    assert_eq!(strip_leading_zeros(&b), "23");
}

#[test]
fn subtract_worked_example() {
    assert_eq!(subtract("123", "23").unwrap(), "100");
}

#[test]
fn subtract_rejects_underflow_after_normalization() {
    let (a, b) = normalize("23", "123");
    assert_eq!((a.as_str(), b.as_str()), ("023", "123"));
    assert_eq!(subtract(&a, &b), Err(Error::Underflow));
}

#[test]
fn strip_converges_on_all_zero_input() {
    assert_eq!(strip_leading_zeros("000"), "0");
    assert_eq!(strip_leading_zeros(strip_leading_zeros("0000")), "0");
}

#[test]
fn divide_worked_example() {
    // 123 stored least significant digit first; 123 = 13 * 9 + 6.
    let n = DecUint::from_digits([3, 2, 1]).unwrap();
    let (quotient, remainder) = n.checked_div_rem_digit(9).unwrap();
    assert_eq!(quotient.to_string(), "13");
    assert_eq!(remainder.get(), 6);
}

#[test]
fn divide_rejects_bad_divisors() {
    let n = DecUint::from(123u64);
    assert_eq!(n.checked_div_rem_digit(0), Err(Error::DivisionByZero));
    assert_eq!(n.checked_div_rem_digit(10), Err(Error::DivisorOutOfRange));
}

#[test]
fn string_and_digit_subtraction_agree() {
    let cases = [("4021", "398"), ("1000000", "1"), ("55", "55"), ("90", "9")];
    for (a, b) in cases {
        let via_strings = {
            let (a, b) = normalize(a, b);
            let diff = subtract(&a, &b).unwrap();
            strip_leading_zeros(&diff).to_string()
        };
        let via_digits = {
            let a: DecUint = a.parse().unwrap();
            let b: DecUint = b.parse().unwrap();
            (a - b).to_string()
        };
        assert_eq!(via_strings, via_digits, "{a} - {b}");
    }
}
