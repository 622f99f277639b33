//! # abiwire-codec
//!
//! Ethereum contract ABI encoding and decoding.
//!
//! Values are laid out in 32-byte words. Static values sit inline in the
//! head of their sequence; dynamic values (strings, bytes, dynamic arrays and
//! any composite holding one) get an offset slot in the head and their body in
//! the trailing tail. Arrays and tuples nest the same head/tail layout, with
//! offsets relative to the start of their own body.
//!
//! ## Encoding
//!
//! ```rust
//! use abiwire_codec::{encode_params, AbiType, Value};
//!
//! let types = [AbiType::Uint(32), AbiType::Bool];
//! let data = encode_params(&types, &[Value::uint(69), Value::Bool(true)]).unwrap();
//! assert_eq!(data.len(), 64);
//! assert_eq!(data[31], 0x45);
//! assert_eq!(data[63], 1);
//! ```
//!
//! ## Decoding
//!
//! ```rust
//! use abiwire_codec::{decode_many, AbiType, Value};
//!
//! let payload = "0x\
//!     0000000000000000000000000000000000000000000000000000000000000045\
//!     0000000000000000000000000000000000000000000000000000000000000001";
//! let results = decode_many(&[AbiType::Uint(32), AbiType::Bool], payload);
//! assert_eq!(results[0], Ok(Value::uint(69)));
//! assert_eq!(results[1], Ok(Value::Bool(true)));
//! ```
//!
//! Decoding is lenient by default: each parameter gets its own `Result`, so a
//! corrupt field does not hide its siblings. [`Decoder::decode_strict`] and
//! [`DecoderConfig::strict`] fail the whole call instead.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod decode;
mod encode;
mod error;
mod int;
mod types;

pub use config::{DecoderConfig, DEFAULT_MAX_DEPTH};
pub use decode::{decode, decode_hex, decode_many, decode_one, Decoder};
pub use encode::{
    encode, encode_function_call, encode_hex, encode_params, encode_token, encode_value, to_hex,
};
pub use error::AbiError;
pub use int::{decode_signed, encode_signed};
pub use types::{AbiType, Value};

// Re-export primitives for convenience
pub use abiwire_primitives::{Address, I256, U256};
