//! Conversion between JSON arguments and ABI values
//!
//! Integers accept JSON numbers or decimal/`0x` hex strings. Addresses and
//! byte strings are hex strings. Arrays and tuples are JSON arrays.

use abiwire_codec::{AbiType, Address, Value, I256, U256};
use abiwire_primitives::PrimitiveError;
use serde_json::Value as Json;

use crate::CliError;

/// Convert a JSON argument into a value of the declared type
pub fn value_from_json(ty: &AbiType, json: &Json) -> Result<Value, CliError> {
    match ty {
        AbiType::Uint(_) => parse_uint(json).map(Value::Uint),
        AbiType::Int(_) => parse_int(json).map(Value::Int),
        AbiType::Bool => json
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| mismatch(ty, json)),
        AbiType::Address => {
            let s = json.as_str().ok_or_else(|| mismatch(ty, json))?;
            let address = Address::from_hex(s).map_err(PrimitiveError::from)?;
            Ok(Value::Address(address))
        }
        AbiType::FixedBytes(_) => parse_hex(ty, json).map(Value::FixedBytes),
        AbiType::Bytes => parse_hex(ty, json).map(Value::Bytes),
        AbiType::String => json
            .as_str()
            .map(Value::string)
            .ok_or_else(|| mismatch(ty, json)),
        AbiType::Array(inner) => elements(inner, json).map(Value::Array),
        AbiType::FixedArray(inner, _) => elements(inner, json).map(Value::FixedArray),
        AbiType::Tuple(types) => {
            let items = json.as_array().ok_or_else(|| mismatch(ty, json))?;
            if items.len() != types.len() {
                return Err(CliError::InvalidInput(format!(
                    "{ty} expects {} members, got {}",
                    types.len(),
                    items.len()
                )));
            }
            types
                .iter()
                .zip(items)
                .map(|(ty, item)| value_from_json(ty, item))
                .collect::<Result<_, _>>()
                .map(Value::Tuple)
        }
    }
}

/// Convert a parameter list
pub fn values_from_json(types: &[AbiType], json: &Json) -> Result<Vec<Value>, CliError> {
    let items = json
        .as_array()
        .ok_or_else(|| CliError::InvalidInput("values must be a JSON array".to_string()))?;
    if items.len() != types.len() {
        return Err(CliError::InvalidInput(format!(
            "expected {} values, got {}",
            types.len(),
            items.len()
        )));
    }
    types
        .iter()
        .zip(items)
        .map(|(ty, item)| value_from_json(ty, item))
        .collect()
}

/// Render a value as JSON, integers as decimal strings
pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Uint(v) => Json::String(v.to_string()),
        Value::Int(v) => Json::String(v.to_string()),
        Value::Bool(b) => Json::Bool(*b),
        Value::Address(a) => Json::String(a.to_hex()),
        Value::FixedBytes(data) | Value::Bytes(data) => {
            Json::String(format!("0x{}", hex::encode(data)))
        }
        Value::String(s) => Json::String(s.clone()),
        Value::Array(items) | Value::FixedArray(items) | Value::Tuple(items) => {
            Json::Array(items.iter().map(value_to_json).collect())
        }
    }
}

fn elements(inner: &AbiType, json: &Json) -> Result<Vec<Value>, CliError> {
    json.as_array()
        .ok_or_else(|| CliError::InvalidInput(format!("expected a JSON array of {inner}")))?
        .iter()
        .map(|item| value_from_json(inner, item))
        .collect()
}

fn parse_uint(json: &Json) -> Result<U256, CliError> {
    match json {
        Json::Number(n) => n
            .as_u64()
            .map(U256::from)
            .ok_or_else(|| CliError::InvalidInput(format!("not an unsigned integer: {n}"))),
        Json::String(s) => {
            let s = s.trim();
            let parsed = match s.strip_prefix("0x") {
                Some(digits) => U256::from_str_radix(digits, 16).ok(),
                None => U256::from_dec_str(s).ok(),
            };
            parsed.ok_or_else(|| CliError::InvalidInput(format!("not an unsigned integer: {s}")))
        }
        other => Err(CliError::InvalidInput(format!("not an unsigned integer: {other}"))),
    }
}

fn parse_int(json: &Json) -> Result<I256, CliError> {
    match json {
        Json::Number(n) => n
            .as_i64()
            .map(I256::from)
            .ok_or_else(|| CliError::InvalidInput(format!("not an integer: {n}"))),
        Json::String(s) => Ok(s.parse::<I256>().map_err(PrimitiveError::from)?),
        other => Err(CliError::InvalidInput(format!("not an integer: {other}"))),
    }
}

fn parse_hex(ty: &AbiType, json: &Json) -> Result<Vec<u8>, CliError> {
    let s = json.as_str().ok_or_else(|| mismatch(ty, json))?;
    let digits = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(digits).map_err(|e| CliError::InvalidHex(format!("{s}: {e}")))
}

fn mismatch(ty: &AbiType, json: &Json) -> CliError {
    CliError::InvalidInput(format!("{json} is not a valid {ty}"))
}
