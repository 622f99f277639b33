//! Common error types for primitives

use thiserror::Error;
use crate::address::AddressError;
use crate::int::IntError;

/// Primitive operation error
#[derive(Debug, Error)]
pub enum PrimitiveError {
    /// Address error
    #[error("address error: {0}")]
    Address(#[from] AddressError),

    /// Signed integer error
    #[error("integer error: {0}")]
    Int(#[from] IntError),
}
