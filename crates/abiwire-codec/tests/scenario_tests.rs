//! Wire-format scenarios for abiwire-codec
//!
//! Byte-exact vectors from the Solidity ABI documentation, plus composite
//! layouts checked in both directions.

use abiwire_codec::{
    decode_hex, decode_one, encode_function_call, encode_hex, encode_params, AbiType, Address,
    Value,
};

/// Left-padded word
fn word(hex_word: &str) -> String {
    format!("{:0>64}", hex_word)
}

/// Right-padded word
fn padded(hex_data: &str) -> String {
    format!("{:0<64}", hex_data)
}

fn hex_of(data: &[u8]) -> String {
    hex::encode(data)
}

fn uint32() -> AbiType {
    AbiType::Uint(32)
}

// ==================== Solidity documentation examples ====================

#[test]
fn test_scalar_pair_with_selector() {
    let encoded = encode_function_call(
        [0xcd, 0xcd, 0x77, 0xc0],
        &[uint32(), AbiType::Bool],
        &[Value::uint(69), Value::Bool(true)],
    )
    .unwrap();
    let expected = "0xcdcd77c0\
        0000000000000000000000000000000000000000000000000000000000000045\
        0000000000000000000000000000000000000000000000000000000000000001";
    assert_eq!(format!("0x{}", hex_of(&encoded)), expected);
}

#[test]
fn test_nested_fixed_array_of_fixed_bytes() {
    let ty = AbiType::array(AbiType::FixedBytes(3), Some(2));
    let value = Value::FixedArray(vec![
        Value::FixedBytes(b"abc".to_vec()),
        Value::FixedBytes(b"def".to_vec()),
    ]);
    let encoded = encode_function_call([0xfc, 0xe3, 0x53, 0xf6], &[ty.clone()], &[value.clone()])
        .unwrap();
    let expected = "0xfce353f6\
        6162630000000000000000000000000000000000000000000000000000000000\
        6465660000000000000000000000000000000000000000000000000000000000";
    assert_eq!(format!("0x{}", hex_of(&encoded)), expected);

    // no count, no offsets
    assert_eq!(decode_one(&ty, &hex_of(&encoded[4..])).unwrap(), value);
}

#[test]
fn test_dynamic_triple() {
    let types = [
        AbiType::Bytes,
        AbiType::Bool,
        AbiType::array(AbiType::Uint(256), None),
    ];
    let values = [
        Value::Bytes(b"dave".to_vec()),
        Value::Bool(true),
        Value::Array(vec![Value::uint(1), Value::uint(2), Value::uint(3)]),
    ];
    let encoded = encode_function_call([0xa5, 0x64, 0x3b, 0xf2], &types, &values).unwrap();
    let expected = [
        "a5643bf2".to_string(),
        word("60"),
        word("1"),
        word("a0"),
        word("4"),
        padded("64617665"),
        word("3"),
        word("1"),
        word("2"),
        word("3"),
    ]
    .concat();
    assert_eq!(hex_of(&encoded), expected);
    assert_eq!(decode_hex(&types, &expected[8..]).unwrap(), values.to_vec());
}

#[test]
fn test_dynamic_triple_decodes_bytes_as_string() {
    let payload = [
        word("60"),
        word("1"),
        word("a0"),
        word("4"),
        padded("64617665"),
        word("3"),
        word("1"),
        word("2"),
        word("3"),
    ]
    .concat();
    let values = decode_hex(
        &[
            AbiType::String,
            AbiType::Bool,
            AbiType::array(AbiType::Uint(256), None),
        ],
        &payload,
    )
    .unwrap();
    assert_eq!(values[0], Value::string("dave"));
    assert_eq!(values[1], Value::Bool(true));
    assert_eq!(
        values[2],
        Value::Array(vec![Value::uint(1), Value::uint(2), Value::uint(3)])
    );
}

#[test]
fn test_mixed_static_and_dynamic() {
    // f(uint256,uint32[],bytes10,bytes) with (0x123, [0x456, 0x789], "1234567890", "Hello, world!")
    let types = [
        AbiType::Uint(256),
        AbiType::array(uint32(), None),
        AbiType::FixedBytes(10),
        AbiType::Bytes,
    ];
    let values = [
        Value::uint(0x123),
        Value::Array(vec![Value::uint(0x456), Value::uint(0x789)]),
        Value::FixedBytes(b"1234567890".to_vec()),
        Value::Bytes(b"Hello, world!".to_vec()),
    ];
    let expected = [
        word("123"),
        word("80"),
        padded("31323334353637383930"),
        word("e0"),
        word("2"),
        word("456"),
        word("789"),
        word("d"),
        padded("48656c6c6f2c20776f726c6421"),
    ]
    .concat();

    let encoded = encode_params(&types, &values).unwrap();
    assert_eq!(hex_of(&encoded), expected);
    assert_eq!(decode_hex(&types, &expected).unwrap(), values.to_vec());
}

// ==================== Tuples ====================

#[test]
fn test_tuple_string_and_int() {
    let ty = AbiType::Tuple(vec![AbiType::String, AbiType::Int(256)]);
    let value = Value::Tuple(vec![Value::string("hello world"), Value::int(8)]);
    let expected = "0x\
        0000000000000000000000000000000000000000000000000000000000000020\
        0000000000000000000000000000000000000000000000000000000000000040\
        0000000000000000000000000000000000000000000000000000000000000008\
        000000000000000000000000000000000000000000000000000000000000000b\
        68656c6c6f20776f726c64000000000000000000000000000000000000000000";

    assert_eq!(encode_hex(&[ty.clone()], &[value.clone()]).unwrap(), expected);
    assert_eq!(decode_one(&ty, expected).unwrap(), value);
}

#[test]
fn test_static_tuple_is_inline() {
    let ty = AbiType::Tuple(vec![AbiType::Uint(256), AbiType::Bool]);
    let value = Value::Tuple(vec![Value::uint(5), Value::Bool(false)]);
    let encoded = encode_hex(&[ty.clone(), AbiType::Uint(8)], &[value.clone(), Value::uint(9)])
        .unwrap();
    assert_eq!(encoded, format!("0x{}{}{}", word("5"), word("0"), word("9")));

    let decoded = decode_hex(&[ty, AbiType::Uint(8)], &encoded).unwrap();
    assert_eq!(decoded, vec![value, Value::uint(9)]);
}

#[test]
fn test_array_of_tuples() {
    let element = AbiType::Tuple(vec![AbiType::Address, AbiType::String]);
    let ty = AbiType::array(element, None);
    let alice = Address::from_bytes([0xaa; 20]);
    let bob = Address::from_bytes([0xbb; 20]);
    let value = Value::Array(vec![
        Value::Tuple(vec![Value::Address(alice), Value::string("alice")]),
        Value::Tuple(vec![Value::Address(bob), Value::string("bob")]),
    ]);

    let encoded = encode_hex(&[ty.clone()], &[value.clone()]).unwrap();
    let expected = [
        "0x".to_string(),
        word("20"),
        word("2"),
        word("40"),
        word("c0"),
        word(&"aa".repeat(20)),
        word("40"),
        word("5"),
        padded("616c696365"),
        word(&"bb".repeat(20)),
        word("40"),
        word("3"),
        padded("626f62"),
    ]
    .concat();
    assert_eq!(encoded, expected);
    assert_eq!(decode_one(&ty, &encoded).unwrap(), value);
}

// ==================== Arrays ====================

#[test]
fn test_address_array() {
    let addresses = [
        Address::from_hex("0xD11Aa575f9C6f30bEDF392872726b2B157C83131").unwrap(),
        Address::from_hex("0x9F2c4Ea0506EeAb4e4Dc634C1e1F4Be71D0d7531").unwrap(),
    ];
    let value = Value::Array(addresses.iter().copied().map(Value::Address).collect());
    let ty = AbiType::array(AbiType::Address, None);
    let expected = "0x\
        0000000000000000000000000000000000000000000000000000000000000020\
        0000000000000000000000000000000000000000000000000000000000000002\
        000000000000000000000000d11aa575f9c6f30bedf392872726b2b157c83131\
        0000000000000000000000009f2c4ea0506eeab4e4dc634c1e1f4be71d0d7531";

    assert_eq!(encode_hex(&[ty.clone()], &[value.clone()]).unwrap(), expected);
    assert_eq!(decode_one(&ty, expected).unwrap(), value);
}

#[test]
fn test_signed_int_array() {
    let ty = AbiType::array(AbiType::Int(256), None);
    let value = Value::Array(vec![Value::int(1), Value::int(-1), Value::int(2), Value::int(-2)]);
    let expected = [
        "0x".to_string(),
        word("20"),
        word("4"),
        word("1"),
        "f".repeat(64),
        word("2"),
        format!("{}e", "f".repeat(63)),
    ]
    .concat();

    assert_eq!(encode_hex(&[ty.clone()], &[value.clone()]).unwrap(), expected);
    assert_eq!(decode_one(&ty, &expected).unwrap(), value);
}

#[test]
fn test_bool_array() {
    let ty = AbiType::array(AbiType::Bool, None);
    let value = Value::Array(vec![
        Value::Bool(true),
        Value::Bool(false),
        Value::Bool(true),
        Value::Bool(false),
    ]);
    let expected = [
        "0x".to_string(),
        word("20"),
        word("4"),
        word("1"),
        word("0"),
        word("1"),
        word("0"),
    ]
    .concat();
    assert_eq!(encode_hex(&[ty.clone()], &[value.clone()]).unwrap(), expected);
    assert_eq!(decode_one(&ty, &expected).unwrap(), value);
}

#[test]
fn test_string_array_has_offsets() {
    let strings = ["abc", "def", "ghi", "jkl", "mno"];
    let ty = AbiType::array(AbiType::String, None);
    let value = Value::Array(strings.iter().map(|s| Value::string(*s)).collect());

    let mut parts = vec![
        "0x".to_string(),
        word("20"),
        word("5"),
        word("a0"),
        word("e0"),
        word("120"),
        word("160"),
        word("1a0"),
    ];
    for s in strings {
        parts.push(word("3"));
        parts.push(padded(&hex::encode(s)));
    }
    let expected = parts.concat();

    assert_eq!(encode_hex(&[ty.clone()], &[value.clone()]).unwrap(), expected);
    assert_eq!(decode_one(&ty, &expected).unwrap(), value);
}

#[test]
fn test_fixed_array_of_strings_omits_count() {
    let ty = AbiType::array(AbiType::String, Some(2));
    let value = Value::FixedArray(vec![Value::string("abc"), Value::string("def")]);
    let expected = [
        "0x".to_string(),
        word("20"),
        word("40"),
        word("80"),
        word("3"),
        padded("616263"),
        word("3"),
        padded("646566"),
    ]
    .concat();

    assert_eq!(encode_hex(&[ty.clone()], &[value.clone()]).unwrap(), expected);
    assert_eq!(decode_one(&ty, &expected).unwrap(), value);
}

#[test]
fn test_nested_dynamic_arrays() {
    let ty = AbiType::array(AbiType::array(uint32(), None), None);
    let value = Value::Array(vec![
        Value::Array(vec![Value::uint(1), Value::uint(2), Value::uint(3)]),
        Value::Array(vec![Value::uint(4), Value::uint(5), Value::uint(6)]),
    ]);
    let expected = [
        "0x".to_string(),
        word("20"),
        word("2"),
        word("40"),
        word("c0"),
        word("3"),
        word("1"),
        word("2"),
        word("3"),
        word("3"),
        word("4"),
        word("5"),
        word("6"),
    ]
    .concat();

    assert_eq!(encode_hex(&[ty.clone()], &[value.clone()]).unwrap(), expected);
    assert_eq!(decode_one(&ty, &expected).unwrap(), value);
}

#[test]
fn test_fixed_array_of_dynamic_arrays() {
    let ty = AbiType::array(AbiType::array(uint32(), None), Some(2));
    let value = Value::FixedArray(vec![
        Value::Array(vec![Value::uint(1), Value::uint(2), Value::uint(3)]),
        Value::Array(vec![Value::uint(4), Value::uint(5), Value::uint(6)]),
    ]);
    let expected = [
        "0x".to_string(),
        word("20"),
        word("40"),
        word("c0"),
        word("3"),
        word("1"),
        word("2"),
        word("3"),
        word("3"),
        word("4"),
        word("5"),
        word("6"),
    ]
    .concat();

    assert_eq!(encode_hex(&[ty.clone()], &[value.clone()]).unwrap(), expected);
    assert_eq!(decode_one(&ty, &expected).unwrap(), value);
}

#[test]
fn test_fixed_array_of_fixed_arrays() {
    let ty = AbiType::array(AbiType::array(AbiType::Uint(64), Some(3)), Some(2));
    let value = Value::FixedArray(vec![
        Value::FixedArray(vec![Value::uint(1), Value::uint(2), Value::uint(3)]),
        Value::FixedArray(vec![Value::uint(4), Value::uint(5), Value::uint(6)]),
    ]);
    let expected: String = ["0x".to_string()]
        .into_iter()
        .chain((1..=6).map(|n| word(&n.to_string())))
        .collect();

    assert_eq!(encode_hex(&[ty.clone()], &[value.clone()]).unwrap(), expected);
    assert_eq!(decode_one(&ty, &expected).unwrap(), value);
}

#[test]
fn test_empty_dynamic_array() {
    let ty = AbiType::array(AbiType::String, None);
    let value = Value::Array(vec![]);
    let expected = format!("0x{}{}", word("20"), word("0"));
    assert_eq!(encode_hex(&[ty.clone()], &[value.clone()]).unwrap(), expected);
    assert_eq!(decode_one(&ty, &expected).unwrap(), value);
}

// ==================== Scalars ====================

#[test]
fn test_single_uint() {
    let expected = format!("0x{}", word("1"));
    assert_eq!(encode_hex(&[AbiType::Uint(256)], &[Value::uint(1)]).unwrap(), expected);
    assert_eq!(decode_one(&AbiType::Uint(256), &expected).unwrap(), Value::uint(1));
}

#[test]
fn test_bytes_roundtrip_dynamic_and_fixed() {
    let data = b"Hi!".to_vec();

    let encoded = encode_hex(&[AbiType::Bytes], &[Value::Bytes(data.clone())]).unwrap();
    assert_eq!(decode_one(&AbiType::Bytes, &encoded).unwrap(), Value::Bytes(data.clone()));

    let ty = AbiType::FixedBytes(data.len());
    let encoded = encode_hex(&[ty.clone()], &[Value::FixedBytes(data.clone())]).unwrap();
    assert_eq!(decode_one(&ty, &encoded).unwrap(), Value::FixedBytes(data));
}

#[test]
fn test_reencode_is_identity() {
    let payload = [
        word("60"),
        word("1"),
        word("a0"),
        word("4"),
        padded("64617665"),
        word("3"),
        word("1"),
        word("2"),
        word("3"),
    ]
    .concat();
    let types = [
        AbiType::Bytes,
        AbiType::Bool,
        AbiType::array(AbiType::Uint(256), None),
    ];
    let values = decode_hex(&types, &payload.to_uppercase()).unwrap();
    assert_eq!(encode_hex(&types, &values).unwrap(), format!("0x{payload}"));
}
