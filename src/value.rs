//! Arbitrary-precision non-negative integers, just wide enough for encoding.
//!
//! A [`BigValue`] is a magnitude stored as big-endian bytes. The only
//! arithmetic the encoder needs is division by a small base with remainder,
//! done as schoolbook long division one byte at a time.

use std::fmt;
use std::str::FromStr;

use crate::error::{IdError, Result};

/// A non-negative integer of any size, stored as big-endian bytes.
///
/// Leading zero bytes are stripped, so zero is the empty byte string and
/// two values are equal exactly when their magnitudes are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigValue {
    bytes: Vec<u8>,
}

impl BigValue {
    /// The value zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Interprets `bytes` as a big-endian unsigned integer.
    ///
    /// Empty and all-zero inputs both give zero.
    #[must_use]
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        Self {
            bytes: bytes[start..].to_vec(),
        }
    }

    /// The minimal big-endian representation; empty for zero.
    #[must_use]
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Divides in place by `divisor` and returns the remainder.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn div_rem_small(&mut self, divisor: u32) -> u32 {
        assert!(divisor != 0, "division by zero");
        let divisor = u64::from(divisor);
        let mut rem: u64 = 0;
        for byte in &mut self.bytes {
            let acc = (rem << 8) | u64::from(*byte);
            // acc < divisor * 256, so the quotient digit fits in a byte
            *byte = (acc / divisor) as u8;
            rem = acc % divisor;
        }
        self.trim();
        // rem < divisor <= u32::MAX
        rem as u32
    }

    /// Multiplies in place by `factor` and adds `addend`.
    #[allow(clippy::cast_possible_truncation)]
    fn mul_add_small(&mut self, factor: u32, addend: u32) {
        let factor = u64::from(factor);
        let mut carry = u64::from(addend);
        for byte in self.bytes.iter_mut().rev() {
            let acc = u64::from(*byte) * factor + carry;
            *byte = acc as u8;
            carry = acc >> 8;
        }
        while carry > 0 {
            self.bytes.insert(0, carry as u8);
            carry >>= 8;
        }
        self.trim();
    }

    fn trim(&mut self) {
        let start = self
            .bytes
            .iter()
            .position(|&b| b != 0)
            .unwrap_or(self.bytes.len());
        if start > 0 {
            self.bytes.drain(..start);
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigValue {
                fn from(value: $t) -> Self {
                    Self::from_be_bytes(&value.to_be_bytes())
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl TryFrom<i128> for BigValue {
    type Error = IdError;

    fn try_from(value: i128) -> Result<Self> {
        u128::try_from(value)
            .map(Self::from)
            .map_err(|_| IdError::NegativeValue {
                value: value.to_string(),
            })
    }
}

impl TryFrom<i64> for BigValue {
    type Error = IdError;

    fn try_from(value: i64) -> Result<Self> {
        Self::try_from(i128::from(value))
    }
}

impl FromStr for BigValue {
    type Err = IdError;

    /// Parses a decimal integer of any length, e.g. `"12345678901234567890"`.
    ///
    /// Negative numbers are rejected with `NegativeValue`, except `-0`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::InvalidNumber {
                input: s.to_string(),
            });
        }

        let mut value = Self::zero();
        for b in digits.bytes() {
            value.mul_add_small(10, u32::from(b - b'0'));
        }

        if negative && !value.is_zero() {
            return Err(IdError::NegativeValue {
                value: trimmed.to_string(),
            });
        }
        Ok(value)
    }
}

impl fmt::Display for BigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut n = self.clone();
        let mut digits = Vec::new();
        while !n.is_zero() {
            let d = n.div_rem_small(10);
            digits.push(char::from_digit(d, 10).unwrap_or('?'));
        }
        let s: String = digits.iter().rev().collect();
        f.write_str(&s)
    }
}
