//! Signed 256-bit integer

use std::fmt;
use std::str::FromStr;

use primitive_types::U256;
use thiserror::Error;

/// Signed integer parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntError {
    /// Not a decimal or 0x-hex number
    #[error("invalid integer literal: {0}")]
    Parse(String),
    /// Outside of the int256 range
    #[error("integer out of int256 range: {0}")]
    Overflow(String),
}

/// Magnitude of `int256` minimum, 2^255
const MIN_ABS: U256 = U256([0, 0, 0, 0x8000_0000_0000_0000]);

/// Magnitude of `int256` maximum, 2^255 - 1
const MAX_ABS: U256 = U256([u64::MAX, u64::MAX, u64::MAX, 0x7fff_ffff_ffff_ffff]);

/// Signed 256-bit integer stored as sign and magnitude.
///
/// Zero is never negative, so derived equality matches numeric equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct I256 {
    abs: U256,
    negative: bool,
}

impl I256 {
    /// Smallest representable value, -2^255
    pub const MIN: I256 = I256 { abs: MIN_ABS, negative: true };

    /// Largest representable value, 2^255 - 1
    pub const MAX: I256 = I256 { abs: MAX_ABS, negative: false };

    /// Zero
    pub const ZERO: I256 = I256 { abs: U256([0; 4]), negative: false };

    /// Create a new I256 from magnitude and sign
    pub fn new(abs: U256, negative: bool) -> Self {
        Self { abs, negative: negative && !abs.is_zero() }
    }

    /// Create from i128
    pub fn from_i128(value: i128) -> Self {
        Self::new(U256::from(value.unsigned_abs()), value < 0)
    }

    /// Convert to i128 if the value fits
    pub fn to_i128(&self) -> Option<i128> {
        if self.abs > U256::from(u128::MAX) {
            return None;
        }
        let abs = self.abs.as_u128();
        if self.negative {
            0i128.checked_sub_unsigned(abs)
        } else {
            i128::try_from(abs).ok()
        }
    }

    /// Absolute value
    pub fn abs(&self) -> U256 {
        self.abs
    }

    /// Check if negative
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.abs.is_zero()
    }

    /// Whether the value is representable as `int<bits>`.
    pub fn fits_in(&self, bits: usize) -> bool {
        debug_assert!(bits > 0 && bits <= 256 && bits % 8 == 0, "invalid int width {bits}");
        let limit = U256::one() << (bits - 1);
        if self.negative {
            self.abs <= limit
        } else {
            self.abs < limit
        }
    }

    /// 256-bit two's-complement word, `2^256 - |v|` for negative values.
    pub fn to_twos_complement(&self) -> U256 {
        if self.negative {
            (!self.abs).overflowing_add(U256::one()).0
        } else {
            self.abs
        }
    }

    /// Read the low `bits` bits of `word` as a two's-complement integer.
    ///
    /// Anything above `bits` is sign-extension padding and is ignored.
    pub fn from_twos_complement(word: U256, bits: usize) -> Self {
        debug_assert!(bits > 0 && bits <= 256 && bits % 8 == 0, "invalid int width {bits}");
        let mask = if bits >= 256 { U256::MAX } else { (U256::one() << bits) - U256::one() };
        let value = word & mask;
        if value.bit(bits - 1) {
            Self::new(((!value) & mask) + U256::one(), true)
        } else {
            Self::new(value, false)
        }
    }
}

impl From<i128> for I256 {
    fn from(value: i128) -> Self {
        Self::from_i128(value)
    }
}

impl From<i64> for I256 {
    fn from(value: i64) -> Self {
        Self::from_i128(value.into())
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.abs)
        } else {
            write!(f, "{}", self.abs)
        }
    }
}

impl FromStr for I256 {
    type Err = IntError;

    /// Parses decimal, or `0x` hex magnitude, with an optional sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if digits.is_empty() {
            return Err(IntError::Parse(s.to_string()));
        }
        let abs = match digits.strip_prefix("0x") {
            Some(hex) => U256::from_str_radix(hex, 16).map_err(|e| IntError::Parse(e.to_string()))?,
            None => U256::from_dec_str(digits).map_err(|e| IntError::Parse(e.to_string()))?,
        };
        let limit = if negative { MIN_ABS } else { MAX_ABS };
        if abs > limit {
            return Err(IntError::Overflow(s.to_string()));
        }
        Ok(Self::new(abs, negative))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for I256 {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for I256 {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(de::Error::custom)
        }
    }
}
