//! Two's-complement conversion between signed integers and ABI words

use abiwire_primitives::{I256, U256, WORD_SIZE};

use crate::AbiError;

/// Encode a signed integer as a 64-character hex word.
///
/// Negative values come out sign-extended (left-padded with `f`).
pub fn encode_signed(value: &I256) -> String {
    hex::encode(word_of(value.to_twos_complement()))
}

/// Decode a hex word as an `int<bits>`.
///
/// The word may be shorter than 32 bytes. Everything above `bits` is treated
/// as padding and dropped before the sign bit is read.
pub fn decode_signed(hex_word: &str, bits: usize) -> Result<I256, AbiError> {
    let hex_word = hex_word.strip_prefix("0x").unwrap_or(hex_word);
    let bytes = hex::decode(hex_word)?;
    if bytes.len() > WORD_SIZE {
        return Err(AbiError::ValueOutOfRange(format!(
            "{} bytes do not fit in one word",
            bytes.len()
        )));
    }
    Ok(I256::from_twos_complement(U256::from_big_endian(&bytes), bits))
}

/// Convert U256 to a 32-byte big-endian word
pub(crate) fn word_of(value: U256) -> [u8; WORD_SIZE] {
    let mut word = [0u8; WORD_SIZE];
    value.to_big_endian(&mut word);
    word
}
