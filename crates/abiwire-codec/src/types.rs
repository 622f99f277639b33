//! ABI type and value definitions, plus the static/dynamic classifier

use std::fmt;

use abiwire_primitives::{Address, I256, U256, WORD_SIZE};

use crate::AbiError;

/// Solidity parameter types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AbiType {
    /// Unsigned integer with bit size (8, 16, ..., 256)
    Uint(usize),
    /// Signed integer with bit size (8, 16, ..., 256)
    Int(usize),
    /// Boolean
    Bool,
    /// Address
    Address,
    /// Fixed-size bytes (size 1-32)
    FixedBytes(usize),
    /// Dynamic bytes
    Bytes,
    /// UTF-8 string
    String,
    /// Dynamic-length array
    Array(Box<AbiType>),
    /// Fixed-length array
    FixedArray(Box<AbiType>, usize),
    /// Tuple, purely positional
    Tuple(Vec<AbiType>),
}

impl AbiType {
    /// Build an array type; `None` gives a dynamic-length array.
    pub fn array(element: AbiType, length: Option<usize>) -> Self {
        match length {
            Some(n) => AbiType::FixedArray(Box::new(element), n),
            None => AbiType::Array(Box::new(element)),
        }
    }

    /// Check if this type is dynamic (variable length)
    pub fn is_dynamic(&self) -> bool {
        match self {
            AbiType::Bytes | AbiType::String | AbiType::Array(_) => true,
            AbiType::FixedArray(inner, _) => inner.is_dynamic(),
            AbiType::Tuple(types) => types.iter().any(AbiType::is_dynamic),
            _ => false,
        }
    }

    /// Bytes this type occupies in the head of an enclosing sequence.
    ///
    /// Dynamic types take a single offset slot. Static fixed arrays and
    /// static tuples are laid out inline.
    pub fn head_width(&self) -> usize {
        debug_assert!(self.validate().is_ok(), "malformed type {self}");
        if self.is_dynamic() {
            return WORD_SIZE;
        }
        match self {
            AbiType::FixedArray(inner, size) => inner.head_width().saturating_mul(*size),
            AbiType::Tuple(types) => types
                .iter()
                .map(AbiType::head_width)
                .fold(0, usize::saturating_add),
            _ => WORD_SIZE,
        }
    }

    /// Reject bit widths and byte sizes Solidity does not define.
    pub fn validate(&self) -> Result<(), AbiError> {
        match self {
            AbiType::Uint(bits) | AbiType::Int(bits) => {
                if *bits == 0 || *bits > 256 || bits % 8 != 0 {
                    return Err(AbiError::Unsupported(self.to_string()));
                }
                Ok(())
            }
            AbiType::FixedBytes(size) => {
                if *size == 0 || *size > WORD_SIZE {
                    return Err(AbiError::Unsupported(self.to_string()));
                }
                Ok(())
            }
            AbiType::Array(inner) | AbiType::FixedArray(inner, _) => inner.validate(),
            AbiType::Tuple(types) => types.iter().try_for_each(AbiType::validate),
            AbiType::Bool | AbiType::Address | AbiType::Bytes | AbiType::String => Ok(()),
        }
    }
}

impl fmt::Display for AbiType {
    /// Canonical Solidity spelling, e.g. `uint256[3]` or `(string,int256)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiType::Uint(bits) => write!(f, "uint{bits}"),
            AbiType::Int(bits) => write!(f, "int{bits}"),
            AbiType::Bool => f.write_str("bool"),
            AbiType::Address => f.write_str("address"),
            AbiType::FixedBytes(size) => write!(f, "bytes{size}"),
            AbiType::Bytes => f.write_str("bytes"),
            AbiType::String => f.write_str("string"),
            AbiType::Array(inner) => write!(f, "{inner}[]"),
            AbiType::FixedArray(inner, size) => write!(f, "{inner}[{size}]"),
            AbiType::Tuple(types) => {
                f.write_str("(")?;
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{ty}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// A decoded or to-be-encoded ABI value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Unsigned integer (8-256 bits)
    Uint(U256),
    /// Signed integer (8-256 bits)
    Int(I256),
    /// Boolean
    Bool(bool),
    /// Address (20 bytes)
    Address(Address),
    /// Fixed-size bytes (1-32)
    FixedBytes(Vec<u8>),
    /// Dynamic bytes
    Bytes(Vec<u8>),
    /// UTF-8 string
    String(String),
    /// Dynamic-length array
    Array(Vec<Value>),
    /// Fixed-length array
    FixedArray(Vec<Value>),
    /// Tuple (struct)
    Tuple(Vec<Value>),
}

impl Value {
    /// Create a uint256 from u128
    pub fn uint(value: u128) -> Self {
        Value::Uint(U256::from(value))
    }

    /// Create an int256 from i128
    pub fn int(value: i128) -> Self {
        Value::Int(I256::from_i128(value))
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Short name of the variant, used in mismatch errors
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Uint(_) => "uint",
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Address(_) => "address",
            Value::FixedBytes(_) => "fixed bytes",
            Value::Bytes(_) => "bytes",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::FixedArray(_) => "fixed array",
            Value::Tuple(_) => "tuple",
        }
    }

    /// Get the type of this value.
    ///
    /// Integers are taken as 256 bits wide and array element types come from
    /// the first element (`uint256` for an empty array).
    pub fn type_of(&self) -> AbiType {
        match self {
            Value::Uint(_) => AbiType::Uint(256),
            Value::Int(_) => AbiType::Int(256),
            Value::Bool(_) => AbiType::Bool,
            Value::Address(_) => AbiType::Address,
            Value::FixedBytes(b) => AbiType::FixedBytes(b.len()),
            Value::Bytes(_) => AbiType::Bytes,
            Value::String(_) => AbiType::String,
            Value::Array(values) => AbiType::Array(Box::new(element_type(values))),
            Value::FixedArray(values) => {
                AbiType::FixedArray(Box::new(element_type(values)), values.len())
            }
            Value::Tuple(values) => AbiType::Tuple(values.iter().map(Value::type_of).collect()),
        }
    }

    fn mismatch(&self, expected: &str) -> AbiError {
        AbiError::TypeMismatch {
            expected: expected.to_string(),
            found: self.kind().to_string(),
        }
    }

    /// Unsigned integer accessor
    pub fn as_uint(&self) -> Result<U256, AbiError> {
        match self {
            Value::Uint(v) => Ok(*v),
            _ => Err(self.mismatch("uint")),
        }
    }

    /// Signed integer accessor
    pub fn as_int(&self) -> Result<I256, AbiError> {
        match self {
            Value::Int(v) => Ok(*v),
            _ => Err(self.mismatch("int")),
        }
    }

    /// Boolean accessor
    pub fn as_bool(&self) -> Result<bool, AbiError> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.mismatch("bool")),
        }
    }

    /// Address accessor
    pub fn as_address(&self) -> Result<Address, AbiError> {
        match self {
            Value::Address(a) => Ok(*a),
            _ => Err(self.mismatch("address")),
        }
    }

    /// Byte accessor, for both fixed and dynamic bytes
    pub fn as_bytes(&self) -> Result<&[u8], AbiError> {
        match self {
            Value::Bytes(b) | Value::FixedBytes(b) => Ok(b),
            _ => Err(self.mismatch("bytes")),
        }
    }

    /// String accessor
    pub fn as_str(&self) -> Result<&str, AbiError> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch("string")),
        }
    }

    /// Element accessor, for both fixed and dynamic arrays
    pub fn as_array(&self) -> Result<&[Value], AbiError> {
        match self {
            Value::Array(v) | Value::FixedArray(v) => Ok(v),
            _ => Err(self.mismatch("array")),
        }
    }

    /// Tuple component accessor
    pub fn as_tuple(&self) -> Result<&[Value], AbiError> {
        match self {
            Value::Tuple(v) => Ok(v),
            _ => Err(self.mismatch("tuple")),
        }
    }
}

fn element_type(values: &[Value]) -> AbiType {
    values.first().map(Value::type_of).unwrap_or(AbiType::Uint(256))
}

impl From<U256> for Value {
    fn from(v: U256) -> Self {
        Value::Uint(v)
    }
}

impl From<I256> for Value {
    fn from(v: I256) -> Self {
        Value::Int(v)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Address> for Value {
    fn from(a: Address) -> Self {
        Value::Address(a)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
