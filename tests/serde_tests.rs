#![cfg(feature = "serde")]

//! Integration tests for serde support in fpbox.
//!
//! `Array<T>` serializes as a plain sequence and `Char` as a one-character
//! string; deserializing a `Char` re-runs its length validation.

use fpbox::array;
use fpbox::sequence::{Array, Char, chars_of};
use rstest::rstest;

// =============================================================================
// Array
// =============================================================================

#[rstest]
fn test_array_serializes_as_sequence() {
    let json = serde_json::to_string(&array![1, 2, 3]).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[rstest]
fn test_array_json_roundtrip() {
    let original = array![String::from("a"), String::from("bc")];
    let json = serde_json::to_string(&original).unwrap();
    let restored: Array<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[rstest]
fn test_empty_array_roundtrip() {
    let restored: Array<u8> = serde_json::from_str("[]").unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_heterogeneous_json_is_rejected() {
    let result: Result<Array<i32>, _> = serde_json::from_str("[1, \"two\"]");
    assert!(result.is_err());
}

// =============================================================================
// Char
// =============================================================================

#[rstest]
fn test_char_array_serializes_as_strings() {
    let json = serde_json::to_string(&chars_of("hi")).unwrap();
    assert_eq!(json, "[\"h\",\"i\"]");

    let restored: Array<Char> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.to_text(), "hi");
}

#[rstest]
#[case("\"\"")]
#[case("\"ab\"")]
fn test_char_deserialization_validates_length(#[case] json: &str) {
    let result: Result<Char, _> = serde_json::from_str(json);
    let message = result.unwrap_err().to_string();
    assert!(message.contains("expected exactly one character"), "{message}");
}

#[rstest]
#[case('a')]
#[case('é')]
#[case('🦀')]
fn test_char_uses_one_string_representation_both_ways(#[case] character: char) {
    use serde::Deserialize;
    use serde::de::IntoDeserializer;
    use serde::de::value::{Error as ValueError, StrDeserializer};

    let cell = Char::from(character);
    let value = serde_json::to_value(cell).unwrap();
    assert_eq!(value, serde_json::Value::String(character.to_string()));

    let text = character.to_string();
    let deserializer: StrDeserializer<'_, ValueError> = text.as_str().into_deserializer();
    assert_eq!(Char::deserialize(deserializer), Ok(cell));
}
