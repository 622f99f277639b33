//! ABI decoding
//!
//! Decoding works on the hex form of the payload. A parameter list is first
//! partitioned into segments: static parameters are read in place from the
//! head, dynamic ones are found through the offset stored in their head slot
//! and run up to the next dynamic offset (or the end of the payload). Each
//! segment is then decoded on its own, so one malformed parameter does not
//! hide the others.

use std::iter;

use abiwire_primitives::{Address, I256, U256, WORD_SIZE};
use tracing::{debug, trace, warn};

use crate::config::DecoderConfig;
use crate::types::{AbiType, Value};
use crate::AbiError;

/// Hex characters per word
const WORD_CHARS: usize = WORD_SIZE * 2;

/// Position of a parameter inside its sequence, in hex characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    /// Inline in the head
    Static { start: usize, len: usize },
    /// Tail range reached through an offset slot
    Dynamic { start: usize, end: usize },
}

#[derive(Debug)]
struct Segment<'a> {
    ty: &'a AbiType,
    location: Result<Location, AbiError>,
}

/// ABI decoder
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with the given settings
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Decoder settings
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a single parameter from a payload
    pub fn decode_one(&self, ty: &AbiType, hex: &str) -> Result<Value, AbiError> {
        self.decode_many(std::slice::from_ref(ty), hex)
            .pop()
            .unwrap_or(Err(AbiError::LengthMismatch { expected: 1, found: 0 }))
    }

    /// Decode every parameter independently.
    ///
    /// The result has one entry per declared type, in order. A failure in one
    /// entry says nothing about the others.
    pub fn decode_many(&self, types: &[AbiType], hex: &str) -> Vec<Result<Value, AbiError>> {
        self.decode_iter(types, hex).collect()
    }

    /// Decode honouring [`DecoderConfig::strict`].
    ///
    /// Lenient mode maps failed parameters to `None`; strict mode returns the
    /// first failure instead.
    pub fn decode_params(
        &self,
        types: &[AbiType],
        hex: &str,
    ) -> Result<Vec<Option<Value>>, AbiError> {
        self.decode_iter(types, hex)
            .enumerate()
            .map(|(i, result)| match result {
                Ok(value) => Ok(Some(value)),
                Err(e) if self.config.strict => Err(e),
                Err(e) => {
                    warn!("parameter {} ({}) failed to decode: {}", i, types[i], e);
                    Ok(None)
                }
            })
            .collect()
    }

    /// Decode all parameters, failing on the first malformed one
    pub fn decode_strict(&self, types: &[AbiType], hex: &str) -> Result<Vec<Value>, AbiError> {
        self.decode_iter(types, hex).collect()
    }

    /// Decode raw bytes, one result per parameter
    pub fn decode_bytes_many(&self, types: &[AbiType], data: &[u8]) -> Vec<Result<Value, AbiError>> {
        self.decode_many(types, &hex::encode(data))
    }

    /// Decode raw bytes, failing on the first malformed parameter
    pub fn decode_bytes(&self, types: &[AbiType], data: &[u8]) -> Result<Vec<Value>, AbiError> {
        self.decode_strict(types, &hex::encode(data))
    }

    fn decode_iter<'a>(
        &'a self,
        types: &'a [AbiType],
        hex: &'a str,
    ) -> impl Iterator<Item = Result<Value, AbiError>> + 'a {
        let payload = strip_prefix(hex);
        debug!("decoding {} parameters from {} hex chars", types.len(), payload.len());

        // head positions depend on every type's width
        let segments = match types.iter().try_for_each(AbiType::validate) {
            Ok(()) => resolve_segments(types.iter(), payload),
            Err(e) => types
                .iter()
                .map(|ty| Segment { ty, location: Err(e.clone()) })
                .collect(),
        };

        segments
            .into_iter()
            .map(move |segment| self.decode_segment(segment, payload, 0))
    }

    fn decode_segment(
        &self,
        segment: Segment<'_>,
        payload: &str,
        depth: usize,
    ) -> Result<Value, AbiError> {
        let hex = match segment.location? {
            Location::Static { start, len } => slice(payload, start, len)?,
            Location::Dynamic { start, end } => slice(payload, start, end - start)?,
        };
        self.decode_type(segment.ty, hex, depth)
    }

    /// Decode one value from its own segment
    fn decode_type(&self, ty: &AbiType, hex: &str, depth: usize) -> Result<Value, AbiError> {
        match ty {
            AbiType::Uint(_) => Ok(Value::Uint(read_u256(hex)?)),
            AbiType::Int(bits) => Ok(Value::Int(I256::from_twos_complement(read_u256(hex)?, *bits))),
            // anything but exactly 1 reads as false
            AbiType::Bool => Ok(Value::Bool(read_u256(hex)? == U256::one())),
            AbiType::Address => {
                let word = read_word(hex, 0)?;
                let mut bytes = [0u8; Address::LEN];
                bytes.copy_from_slice(&word[WORD_SIZE - Address::LEN..]);
                Ok(Value::Address(Address::from_bytes(bytes)))
            }
            AbiType::FixedBytes(size) => Ok(Value::FixedBytes(hex::decode(slice(hex, 0, size * 2)?)?)),
            AbiType::Bytes => Ok(Value::Bytes(read_dynamic_bytes(hex)?)),
            AbiType::String => Ok(Value::String(String::from_utf8(read_dynamic_bytes(hex)?)?)),
            AbiType::Array(inner) => {
                self.check_depth(depth)?;
                let count = read_count(hex)?;
                let body = hex.get(WORD_CHARS..).unwrap_or("");
                ensure_fits(count, inner, body)?;
                let elements = iter::repeat(inner.as_ref()).take(count);
                Ok(Value::Array(self.decode_sequence(elements, body, depth + 1)?))
            }
            AbiType::FixedArray(inner, size) => {
                self.check_depth(depth)?;
                ensure_fits(*size, inner, hex)?;
                let elements = iter::repeat(inner.as_ref()).take(*size);
                Ok(Value::FixedArray(self.decode_sequence(elements, hex, depth + 1)?))
            }
            AbiType::Tuple(types) => {
                self.check_depth(depth)?;
                Ok(Value::Tuple(self.decode_sequence(types.iter(), hex, depth + 1)?))
            }
        }
    }

    /// Nested head/tail decode scoped to `hex`
    fn decode_sequence<'a, I>(&self, types: I, hex: &str, depth: usize) -> Result<Vec<Value>, AbiError>
    where
        I: Iterator<Item = &'a AbiType> + Clone,
    {
        resolve_segments(types, hex)
            .into_iter()
            .map(|segment| self.decode_segment(segment, hex, depth))
            .collect()
    }

    fn check_depth(&self, depth: usize) -> Result<(), AbiError> {
        if depth >= self.config.max_depth {
            return Err(AbiError::DepthExceeded(self.config.max_depth));
        }
        Ok(())
    }
}

/// Partition a sequence into per-parameter segments.
///
/// Head slots sit at the running sum of static head widths. Dynamic offsets
/// must land in the tail and must not decrease; each dynamic range ends where
/// the next valid one starts.
fn resolve_segments<'a, I>(types: I, payload: &str) -> Vec<Segment<'a>>
where
    I: Iterator<Item = &'a AbiType> + Clone,
{
    let head_len = types
        .clone()
        .map(|ty| ty.head_width().saturating_mul(2))
        .fold(0, usize::saturating_add);
    let mut segments = Vec::new();
    let mut cursor = 0;
    let mut last_start = head_len;

    for ty in types {
        let width = ty.head_width().saturating_mul(2);
        let location = if ty.is_dynamic() {
            match read_offset(payload, cursor, head_len, last_start) {
                Ok(start) => {
                    last_start = start;
                    Ok(Location::Dynamic { start, end: payload.len() })
                }
                Err(e) => Err(e),
            }
        } else {
            Ok(Location::Static { start: cursor, len: width })
        };
        trace!("segment {} at head {}: {:?}", ty, cursor / 2, location);
        segments.push(Segment { ty, location });
        cursor = cursor.saturating_add(width);
    }

    let mut next_start = payload.len();
    for segment in segments.iter_mut().rev() {
        if let Ok(Location::Dynamic { start, end }) = &mut segment.location {
            *end = next_start;
            next_start = *start;
        }
    }

    segments
}

/// Read a dynamic offset slot and turn it into a hex-character position
fn read_offset(
    payload: &str,
    cursor: usize,
    head_len: usize,
    last_start: usize,
) -> Result<usize, AbiError> {
    let offset = U256::from_big_endian(&read_word(payload, cursor)?);
    let corrupt = |reason| AbiError::CorruptOffsetTable { offset, reason };

    if offset > U256::from(payload.len() / 2) {
        return Err(corrupt("points past the end of the payload"));
    }
    let start = offset.as_usize() * 2;
    if start < head_len {
        return Err(corrupt("points into the head"));
    }
    if start < last_start {
        return Err(corrupt("is below a preceding offset"));
    }
    Ok(start)
}

/// Reject counts whose minimal footprint exceeds what is left
fn ensure_fits(count: usize, element: &AbiType, body: &str) -> Result<(), AbiError> {
    let per_element = element.head_width().saturating_mul(2).max(1);
    let needed = count.saturating_mul(per_element);
    if needed > body.len() {
        return Err(AbiError::truncated_chars(needed, body.len()));
    }
    Ok(())
}

/// Length word followed by that many bytes, padding ignored
fn read_dynamic_bytes(hex: &str) -> Result<Vec<u8>, AbiError> {
    let len = read_count(hex)?;
    let body = hex.get(WORD_CHARS..).unwrap_or("");
    Ok(hex::decode(slice(body, 0, len.saturating_mul(2))?)?)
}

/// First word as a count, saturating at `usize::MAX`
fn read_count(hex: &str) -> Result<usize, AbiError> {
    let value = read_u256(hex)?;
    if value > U256::from(usize::MAX) {
        return Ok(usize::MAX);
    }
    Ok(value.as_usize())
}

fn read_u256(hex: &str) -> Result<U256, AbiError> {
    Ok(U256::from_big_endian(&read_word(hex, 0)?))
}

fn read_word(hex: &str, pos: usize) -> Result<[u8; WORD_SIZE], AbiError> {
    let mut word = [0u8; WORD_SIZE];
    hex::decode_to_slice(slice(hex, pos, WORD_CHARS)?, &mut word)?;
    Ok(word)
}

fn slice(hex: &str, start: usize, len: usize) -> Result<&str, AbiError> {
    let end = start.saturating_add(len);
    if end > hex.len() {
        return Err(AbiError::truncated_chars(end, hex.len()));
    }
    hex.get(start..end)
        .ok_or_else(|| AbiError::InvalidHex("non-ASCII character in payload".to_string()))
}

fn strip_prefix(hex: &str) -> &str {
    let hex = hex.trim();
    hex.strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex)
}

/// Decode raw bytes with the default configuration, failing on the first
/// malformed parameter
pub fn decode(types: &[AbiType], data: &[u8]) -> Result<Vec<Value>, AbiError> {
    Decoder::default().decode_bytes(types, data)
}

/// Decode a hex payload with the default configuration, failing on the
/// first malformed parameter
pub fn decode_hex(types: &[AbiType], hex: &str) -> Result<Vec<Value>, AbiError> {
    Decoder::default().decode_strict(types, hex)
}

/// Decode a single parameter with the default configuration
pub fn decode_one(ty: &AbiType, hex: &str) -> Result<Value, AbiError> {
    Decoder::default().decode_one(ty, hex)
}

/// Decode every parameter independently with the default configuration
pub fn decode_many(types: &[AbiType], hex: &str) -> Vec<Result<Value, AbiError>> {
    Decoder::default().decode_many(types, hex)
}
