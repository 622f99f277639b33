//! ABI encoding

use std::iter;

use abiwire_primitives::{U256, WORD_SIZE};
use tracing::trace;

use crate::int::word_of;
use crate::types::{AbiType, Value};
use crate::AbiError;

/// Encode values according to the Solidity ABI, inferring each type from its value
pub fn encode(values: &[Value]) -> Result<Vec<u8>, AbiError> {
    let types: Vec<AbiType> = values.iter().map(Value::type_of).collect();
    encode_params(&types, values)
}

/// Encode values under their declared types, head/tail layout
pub fn encode_params(types: &[AbiType], values: &[Value]) -> Result<Vec<u8>, AbiError> {
    if types.len() != values.len() {
        return Err(AbiError::LengthMismatch {
            expected: types.len(),
            found: values.len(),
        });
    }
    types.iter().try_for_each(AbiType::validate)?;
    encode_sequence(types.iter(), values)
}

/// Encode function call (caller-supplied selector + params)
pub fn encode_function_call(
    selector: [u8; 4],
    types: &[AbiType],
    values: &[Value],
) -> Result<Vec<u8>, AbiError> {
    let mut result = selector.to_vec();
    result.extend(encode_params(types, values)?);
    Ok(result)
}

/// Encode a single value under its declared type.
///
/// Static types produce their inline words. Dynamic types produce their own
/// body (length or count prefix plus nested head/tail); placing that body
/// behind an offset is the enclosing sequence's job.
pub fn encode_token(ty: &AbiType, value: &Value) -> Result<Vec<u8>, AbiError> {
    ty.validate()?;
    encode_checked(ty, value)
}

/// Encode a value with its inferred type.
///
/// `dynamic` picks the length-prefixed form for bytes and arrays; otherwise
/// bytes are right-padded in place and array elements are laid out without a
/// count.
pub fn encode_value(value: &Value, dynamic: bool) -> Result<Vec<u8>, AbiError> {
    match value {
        Value::Bytes(data) | Value::FixedBytes(data) => {
            if dynamic {
                Ok(encode_bytes(data))
            } else {
                Ok(pad_right(data))
            }
        }
        Value::Array(values) | Value::FixedArray(values) => {
            let element = values.first().map(Value::type_of).unwrap_or(AbiType::Uint(256));
            element.validate()?;
            let body = encode_sequence(iter::repeat(&element).take(values.len()), values)?;
            if dynamic {
                let mut result = encode_usize(values.len()).to_vec();
                result.extend(body);
                Ok(result)
            } else {
                Ok(body)
            }
        }
        _ => encode_token(&value.type_of(), value),
    }
}

/// Encode values as `0x`-prefixed lowercase hex
pub fn encode_hex(types: &[AbiType], values: &[Value]) -> Result<String, AbiError> {
    Ok(to_hex(&encode_params(types, values)?))
}

/// Format bytes as `0x`-prefixed lowercase hex
pub fn to_hex(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

/// Head/tail layout for one sequence; offsets are relative to its start.
fn encode_sequence<'a, I>(types: I, values: &[Value]) -> Result<Vec<u8>, AbiError>
where
    I: Iterator<Item = &'a AbiType> + Clone,
{
    let head_size = types
        .clone()
        .map(AbiType::head_width)
        .fold(0, usize::saturating_add);

    let mut head = Vec::new();
    let mut tail = Vec::new();

    for (ty, value) in types.zip(values) {
        if ty.is_dynamic() {
            let offset = head_size.saturating_add(tail.len());
            trace!("{} at offset {}", ty, offset);
            head.extend_from_slice(&encode_usize(offset));
            tail.extend(encode_checked(ty, value)?);
        } else {
            head.extend(encode_checked(ty, value)?);
        }
    }

    head.extend(tail);
    Ok(head)
}

fn encode_checked(ty: &AbiType, value: &Value) -> Result<Vec<u8>, AbiError> {
    match (ty, value) {
        (AbiType::Address, Value::Address(addr)) => {
            let mut buf = [0u8; WORD_SIZE];
            buf[12..].copy_from_slice(addr.as_bytes());
            Ok(buf.to_vec())
        }
        (AbiType::Uint(bits), Value::Uint(v)) => {
            if *bits < 256 && v.bits() > *bits {
                return Err(AbiError::ValueOutOfRange(format!("{v} does not fit in {ty}")));
            }
            Ok(word_of(*v).to_vec())
        }
        (AbiType::Int(bits), Value::Int(v)) => {
            if !v.fits_in(*bits) {
                return Err(AbiError::ValueOutOfRange(format!("{v} does not fit in {ty}")));
            }
            Ok(word_of(v.to_twos_complement()).to_vec())
        }
        (AbiType::Bool, Value::Bool(b)) => Ok(encode_usize(usize::from(*b)).to_vec()),
        (AbiType::FixedBytes(size), Value::FixedBytes(data)) => {
            if data.len() != *size {
                return Err(AbiError::LengthMismatch {
                    expected: *size,
                    found: data.len(),
                });
            }
            Ok(pad_right(data))
        }
        (AbiType::Bytes, Value::Bytes(data)) => Ok(encode_bytes(data)),
        (AbiType::String, Value::String(s)) => Ok(encode_bytes(s.as_bytes())),
        (AbiType::Array(inner), Value::Array(values)) => {
            let mut result = encode_usize(values.len()).to_vec();
            result.extend(encode_sequence(iter::repeat(inner.as_ref()).take(values.len()), values)?);
            Ok(result)
        }
        (AbiType::FixedArray(inner, size), Value::FixedArray(values)) => {
            if values.len() != *size {
                return Err(AbiError::LengthMismatch {
                    expected: *size,
                    found: values.len(),
                });
            }
            encode_sequence(iter::repeat(inner.as_ref()).take(*size), values)
        }
        (AbiType::Tuple(types), Value::Tuple(values)) => {
            if values.len() != types.len() {
                return Err(AbiError::LengthMismatch {
                    expected: types.len(),
                    found: values.len(),
                });
            }
            encode_sequence(types.iter(), values)
        }
        _ => Err(AbiError::TypeMismatch {
            expected: ty.to_string(),
            found: value.kind().to_string(),
        }),
    }
}

/// Encode a length, count or offset as one word
fn encode_usize(value: usize) -> [u8; WORD_SIZE] {
    word_of(U256::from(value))
}

/// Right-pad to the next word boundary
fn pad_right(data: &[u8]) -> Vec<u8> {
    let mut padded = vec![0u8; data.len().div_ceil(WORD_SIZE) * WORD_SIZE];
    padded[..data.len()].copy_from_slice(data);
    padded
}

/// Encode dynamic bytes: byte count, then padded content
fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let mut result = encode_usize(data.len()).to_vec();
    result.extend(pad_right(data));
    result
}
