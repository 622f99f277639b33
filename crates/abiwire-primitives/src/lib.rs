//! # abiwire-primitives
//!
//! Primitive wire types for the abiwire Ethereum ABI codec.
//!
//! This crate provides the fixed-width values that appear inside ABI words:
//! addresses, unsigned 256-bit integers and signed 256-bit integers with
//! two's-complement conversion.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod error;
mod int;

pub use address::{Address, AddressError};
pub use error::PrimitiveError;
pub use int::{I256, IntError};

// Re-export primitive-types for U256
pub use primitive_types::U256;

/// Size of one ABI word in bytes
pub const WORD_SIZE: usize = 32;
