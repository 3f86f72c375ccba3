//! Format conformance tests: token-level expectations for decoding and
//! encoding, grammar boundaries, and error kinds.

use serde_xton::{decode, decode_slice, encode, xton, SyntaxError, Value, XtonMap};

fn kind_of(text: &str) -> Option<SyntaxError> {
    decode(text).unwrap_err().syntax_kind()
}

// ===== Decoding =====

#[test]
fn test_decode_array_of_mixed_scalars() {
    assert_eq!(decode("[a/25.3/87]").unwrap(), xton!(["a", 25.3, 87]));
}

#[test]
fn test_decode_implicit_pair_with_nested_object() {
    let value = decode("q-<a-\\none/k-\\true/g-[a/25.3/87]>").unwrap();
    assert_eq!(
        value,
        xton!({"q": {"a": null, "k": true, "g": ["a", 25.3, 87]}})
    );
}

#[test]
fn test_decode_empty_containers() {
    assert_eq!(decode("<>").unwrap(), Value::Object(XtonMap::new()));
    assert_eq!(decode("[]").unwrap(), Value::Array(vec![]));
    assert_eq!(decode(" < > ").unwrap(), Value::Object(XtonMap::new()));
    assert_eq!(decode("[ ]").unwrap(), Value::Array(vec![]));
}

#[test]
fn test_decode_escapes() {
    assert_eq!(decode("'a\\-b'").unwrap(), Value::from("a-b"));
    assert_eq!(decode("<'\\-key'-'value'>").unwrap(), xton!({"-key": "value"}));
}

#[test]
fn test_decode_literal_priority() {
    assert_eq!(decode("\\true").unwrap(), Value::Bool(true));
    assert_eq!(decode("[\\false/\\none]").unwrap(), xton!([false, null]));
}

#[test]
fn test_decode_numbers_fall_through_to_strings() {
    assert_eq!(decode("-x").unwrap_err().syntax_kind(), Some(SyntaxError::InvalidDocument));
    assert_eq!(decode("[-5/5x]").unwrap_err().syntax_kind(), Some(SyntaxError::MalformedArray));
    assert_eq!(decode("[x5/.5]").unwrap(), xton!(["x5", ".5"]));
}

#[test]
fn test_decode_unicode_strings() {
    assert_eq!(decode("[héllo/日本]").unwrap(), xton!(["héllo", "日本"]));
    assert_eq!(decode("'naïve café'").unwrap(), Value::from("naïve café"));
}

#[test]
fn test_decode_collapse_symmetry() {
    assert_eq!(decode("x-1").unwrap(), xton!({"x": 1}));
    assert_eq!(encode(&xton!({"x": 1})).unwrap(), "x-1");
}

// ===== Errors =====

#[test]
fn test_unterminated_object() {
    assert_eq!(kind_of("<a-1"), Some(SyntaxError::UnterminatedObject));
}

#[test]
fn test_key_value_pair_inside_array_is_malformed() {
    assert_eq!(kind_of("[a-1]"), Some(SyntaxError::MalformedArray));
}

#[test]
fn test_error_kinds() {
    assert_eq!(kind_of("<a>"), Some(SyntaxError::MissingKeySeparator));
    assert_eq!(kind_of("<a-1]"), Some(SyntaxError::MalformedObject));
    assert_eq!(kind_of("[1>"), Some(SyntaxError::MalformedArray));
    assert_eq!(kind_of("[1"), Some(SyntaxError::UnterminatedArray));
    assert_eq!(kind_of("'open"), Some(SyntaxError::UnterminatedString));
    assert_eq!(kind_of("<-1>"), Some(SyntaxError::InvalidValue));
    assert_eq!(kind_of("/"), Some(SyntaxError::InvalidDocument));
    assert_eq!(kind_of(""), Some(SyntaxError::InvalidDocument));
}

#[test]
fn test_invalid_utf8() {
    let err = decode_slice(b"[ok/'\xe2\x28\xa1']").unwrap_err();
    assert_eq!(err.syntax_kind(), Some(SyntaxError::InvalidEncoding));
    assert_eq!(err.offset(), Some(4));
}

#[test]
fn test_error_position() {
    let err = decode("<a-1/\n b-2/\n c 3>").unwrap_err();
    assert_eq!(err.syntax_kind(), Some(SyntaxError::MissingKeySeparator));
    assert_eq!(err.offset(), Some(15));
    assert!(err.to_string().contains("line 3, column 4"));

    let err = decode("<a-1/\n b-2\n c-3>").unwrap_err();
    assert_eq!(err.syntax_kind(), Some(SyntaxError::MalformedObject));
    assert_eq!(err.offset(), Some(12));
    assert!(err.to_string().contains("line 3, column 2"));
}

// ===== Encoding =====

#[test]
fn test_encode_single_entry_object() {
    assert_eq!(encode(&xton!({"key": "value"})).unwrap(), "key-'value'");
}

#[test]
fn test_encode_quoted_key() {
    assert_eq!(
        encode(&xton!({"quoted key": "quoted value"})).unwrap(),
        "<'quoted key'-'quoted value'>"
    );
    assert_eq!(
        encode(&xton!({"-key": "value"})).unwrap(),
        "<'\\-key'-'value'>"
    );
}

#[test]
fn test_encode_multi_entry_object() {
    assert_eq!(
        encode(&xton!({"num": 123, "bool": true})).unwrap(),
        "<num-123/bool-\\true>"
    );
}

#[test]
fn test_encode_nested_object() {
    assert_eq!(
        encode(&xton!({"obj": {"a": 1, "b": 2}})).unwrap(),
        "obj-<a-1/b-2>"
    );
}

#[test]
fn test_encode_standalone_string_is_quoted() {
    assert_eq!(encode(&xton!("23.5")).unwrap(), "'23.5'");
    assert_eq!(encode(&xton!("a-b")).unwrap(), "'a\\-b'");
    assert_eq!(encode(&xton!("plain")).unwrap(), "'plain'");
}

#[test]
fn test_encode_arrays() {
    assert_eq!(
        encode(&xton!([true, "hello", null])).unwrap(),
        "[\\true/hello/\\none]"
    );
    assert_eq!(encode(&xton!([1, [2, 3], 4])).unwrap(), "[1/[2/3]/4]");
}

#[test]
fn test_encode_numbers() {
    assert_eq!(encode(&Value::Number(3.0)).unwrap(), "3");
    assert_eq!(
        decode(&encode(&Value::Number(3.5)).unwrap()).unwrap(),
        Value::Number(3.5)
    );
    assert_eq!(encode(&Value::Number(0.1)).unwrap(), "0.1");
    assert_eq!(encode(&Value::Number(-2.0)).unwrap(), "-2");

    let large = encode(&Value::Number(1e20)).unwrap();
    assert_eq!(large, "100000000000000000000");
    assert_eq!(decode(&large).unwrap(), Value::Number(1e20));
}

#[test]
fn test_encoding_is_idempotent() {
    let value = xton!({"a": ["x", "1", ""], "b c": {"d": 0.5}});
    let first = encode(&value).unwrap();
    let second = encode(&value).unwrap();
    assert_eq!(first, second);
    assert_eq!(decode(&first).unwrap(), value);
}
