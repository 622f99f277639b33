//! Codec error types

use abiwire_primitives::U256;
use thiserror::Error;

/// ABI codec error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// Non-hex characters or odd length
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Segment shorter than the type requires
    #[error("Insufficient data: need {needed} bytes, have {available}")]
    Truncated {
        /// Bytes required
        needed: usize,
        /// Bytes present
        available: usize,
    },

    /// String payload is not UTF-8
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(String),

    /// A dynamic offset points outside the tail or runs backwards
    #[error("Corrupt offset table: offset {offset} {reason}")]
    CorruptOffsetTable {
        /// Offset as read from the head slot, in bytes
        offset: U256,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Type outside of what the codec handles
    #[error("Unsupported type: {0}")]
    Unsupported(String),

    /// Value does not match the declared type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Declared type
        expected: String,
        /// What was supplied
        found: String,
    },

    /// Value does not fit the declared width
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// Composite nesting exceeds the configured limit
    #[error("Nesting depth exceeds limit of {0}")]
    DepthExceeded(usize),

    /// Element or parameter count differs from the declared one
    #[error("Length mismatch: expected {expected}, found {found}")]
    LengthMismatch {
        /// Declared count
        expected: usize,
        /// Supplied count
        found: usize,
    },
}

impl From<hex::FromHexError> for AbiError {
    fn from(e: hex::FromHexError) -> Self {
        AbiError::InvalidHex(e.to_string())
    }
}

impl From<std::string::FromUtf8Error> for AbiError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        AbiError::InvalidUtf8(e.to_string())
    }
}

impl AbiError {
    /// Truncation error measured in hex characters
    pub(crate) fn truncated_chars(needed: usize, available: usize) -> Self {
        AbiError::Truncated {
            needed: needed.div_ceil(2),
            available: available / 2,
        }
    }
}
