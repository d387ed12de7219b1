//! Decimal string encoding and decoding for [`DecUint`].

use alloc::vec::Vec;
use core::{fmt, str::FromStr};

use crate::{DecUint, Digit, Error};

impl DecUint {
    /// Parse a value from a decimal string in conventional written order
    /// (most significant digit first).
    ///
    /// Leading zeros are accepted and canonicalized away. The empty string
    /// and any non-digit character are rejected with
    /// [`Error::InvalidDigit`].
    pub fn from_decimal(value: &str) -> Result<Self, Error> {
        Self::from_decimal_bytes(value.as_bytes())
    }

    /// Parse a value from a decimal string of UTF-8 bytes.
    pub fn from_decimal_bytes(value: &[u8]) -> Result<Self, Error> {
        if value.is_empty() {
            return Err(Error::InvalidDigit);
        }
        let digits = value
            .iter()
            .rev()
            .map(|&c| Digit::from_ascii(c).ok_or(Error::InvalidDigit))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_digit_vec(digits))
    }
}

impl FromStr for DecUint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_decimal(s)
    }
}

impl fmt::Display for DecUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.as_digits().iter().rev() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for DecUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecUint({self})")
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::{DecUint, Digit, Error};

    #[test]
    fn decode_simple() {
        let n = DecUint::from_decimal("123").unwrap();
        assert_eq!(n.as_digits(), [Digit(3), Digit(2), Digit(1)]);
    }

    #[test]
    fn decode_leading_zeros() {
        assert_eq!(
            DecUint::from_decimal("0023").unwrap(),
            DecUint::from(23u64)
        );
        assert!(DecUint::from_decimal("000").unwrap().is_zero());
    }

    #[test]
    fn decode_empty() {
        assert_eq!(DecUint::from_decimal(""), Err(Error::InvalidDigit));
    }

    #[test]
    fn decode_invalid() {
        assert_eq!(DecUint::from_decimal("12a3"), Err(Error::InvalidDigit));
        assert_eq!(DecUint::from_decimal("-123"), Err(Error::InvalidDigit));
    }

    #[test]
    fn display_round_trip() {
        for s in ["0", "5", "10", "907", "123456789012345678901234567890"] {
            let n: DecUint = s.parse().unwrap();
            assert_eq!(n.to_string(), s);
        }
    }

    #[test]
    fn display_zero() {
        assert_eq!(DecUint::zero().to_string(), "0");
    }
}
