// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use crate::ValueError;
use pretty_assertions::assert_eq;

fn sample_object() -> GenericValue {
    let mut value = GenericValue::Null;
    let fields = value.set_object();
    fields.insert("name".into(), "server".into());
    fields.insert("port".into(), 8080u16.into());
    fields.insert(
        "tags".into(),
        GenericValue::Array(vec!["a".into(), "b".into()]),
    );
    value
}

// ===== Construction Tests =====

#[test]
fn test_unsigned_widths_collapse() {
    assert_eq!(GenericValue::from(7u8).tag(), Tag::Unsigned);
    assert_eq!(GenericValue::from(7u16).tag(), Tag::Unsigned);
    assert_eq!(GenericValue::from(7u32), GenericValue::Unsigned(7));
    assert_eq!(GenericValue::from(u64::MAX), GenericValue::Unsigned(u64::MAX));
    assert_eq!(GenericValue::from(7usize).tag(), Tag::Unsigned);
}

#[test]
fn test_signed_widths_collapse() {
    assert_eq!(GenericValue::from(-7i8), GenericValue::Signed(-7));
    assert_eq!(GenericValue::from(-7i16).tag(), Tag::Signed);
    assert_eq!(GenericValue::from(-7i32).tag(), Tag::Signed);
    assert_eq!(GenericValue::from(i64::MIN), GenericValue::Signed(i64::MIN));
    assert_eq!(GenericValue::from(-7isize).tag(), Tag::Signed);
}

#[test]
fn test_float_widths_collapse() {
    assert_eq!(GenericValue::from(1.5f32), GenericValue::Double(1.5));
    assert_eq!(GenericValue::from(1.5f64), GenericValue::Double(1.5));
}

#[test]
fn test_char_and_bool_keep_tags() {
    assert_eq!(GenericValue::from('x').tag(), Tag::Char);
    assert_eq!(GenericValue::from(true).tag(), Tag::Bool);
    assert_eq!(GenericValue::from(()).tag(), Tag::Null);
}

#[test]
fn test_collect_into_array_and_object() {
    let array: GenericValue = (1i32..=3).map(GenericValue::from).collect();
    assert_eq!(array.len(), 3);
    assert!(array.is_array());

    let object: GenericValue = vec![("a", GenericValue::from(1u8)), ("b", GenericValue::Null)]
        .into_iter()
        .collect();
    assert!(object.is_object());
    assert_eq!(object["a"], GenericValue::Unsigned(1));
}

// ===== Query Tests =====

#[test]
fn test_default_is_null() {
    let value = GenericValue::default();
    assert!(value.is_null());
    assert_eq!(value.get_unsigned(), 0);
    assert_eq!(value.get_signed(), 0);
    assert_eq!(value.get_double(), 0.0);
    assert_eq!(value.get_char(), '\0');
    assert!(!value.get_bool());
}

#[test]
fn test_is_queries_match_tag() {
    let values = [
        GenericValue::Null,
        GenericValue::Char('c'),
        GenericValue::Bool(true),
        GenericValue::Signed(-1),
        GenericValue::Unsigned(1),
        GenericValue::Double(0.5),
        GenericValue::from("s"),
        GenericValue::Array(vec![]),
        GenericValue::Object(GenericObject::new()),
    ];
    for value in &values {
        let tag = value.tag();
        assert_eq!(value.is_null(), tag == Tag::Null);
        assert_eq!(value.is_char(), tag == Tag::Char);
        assert_eq!(value.is_bool(), tag == Tag::Bool);
        assert_eq!(value.is_signed(), tag == Tag::Signed);
        assert_eq!(value.is_unsigned(), tag == Tag::Unsigned);
        assert_eq!(value.is_double(), tag == Tag::Double);
        assert_eq!(value.is_string(), tag == Tag::String);
        assert_eq!(value.is_array(), tag == Tag::Array);
        assert_eq!(value.is_object(), tag == Tag::Object);
        assert_eq!(
            value.is_number(),
            matches!(tag, Tag::Signed | Tag::Unsigned | Tag::Double)
        );
        assert_eq!(
            value.tag().is_heap(),
            value.is_string() || value.is_array() || value.is_object()
        );
    }
}

// ===== Coercion Tests =====

#[test]
fn test_unsigned_42_coerces() {
    let value = GenericValue::from(42u32);
    assert_eq!(value.tag(), Tag::Unsigned);
    assert_eq!(value.get_signed(), 42);
    assert_eq!(value.get_char(), '*');
    assert_eq!(value.get_double(), 42.0);
    assert!(value.get_bool());
}

#[test]
fn test_double_truncates_toward_zero() {
    assert_eq!(GenericValue::Double(3.99).get_unsigned(), 3);
    assert_eq!(GenericValue::Double(-3.99).get_signed(), -3);
    assert_eq!(GenericValue::Double(f64::NAN).get_unsigned(), 0);
    assert_eq!(GenericValue::Double(-1.0).get_unsigned(), 0);
}

#[test]
fn test_char_and_bool_as_numbers() {
    assert_eq!(GenericValue::Char('A').get_unsigned(), 65);
    assert_eq!(GenericValue::Bool(true).get_signed(), 1);
    assert_eq!(GenericValue::Char('\0').get_bool(), false);
    assert_eq!(GenericValue::Bool(true).get_char(), '\u{1}');
}

#[test]
fn test_containers_read_as_zero() {
    let value = sample_object();
    assert_eq!(value.get_unsigned(), 0);
    assert_eq!(GenericValue::Array(vec![1u8.into()]).get_double(), 0.0);
}

#[test]
fn test_string_coercion_parses() {
    assert_eq!(GenericValue::from(" 17 ").get_unsigned(), 17);
    assert_eq!(GenericValue::from("-4").get_signed(), -4);
    assert_eq!(GenericValue::from("2.5").get_double(), 2.5);
    assert_eq!(GenericValue::from("TRUE").get_bool(), true);
    assert_eq!(GenericValue::from("z").get_char(), 'z');
    assert_eq!(GenericValue::from("3.0").try_unsigned(), Ok(3));
}

#[test]
fn test_string_coercion_failure_is_reported() {
    let value = GenericValue::from("not a number");
    assert_eq!(value.get_unsigned(), 0);
    let err = value.try_unsigned().unwrap_err();
    assert!(matches!(err, ValueError::Parse { .. }));
    assert_eq!(err.code(), Some(410));

    assert!(GenericValue::from("ab").try_char().is_err());
    assert!(GenericValue::from("yes").try_bool().is_err());
    assert!(GenericValue::from("2.5").try_signed().is_err());
}

#[test]
fn test_checked_coercion_ranges() {
    assert!(GenericValue::Signed(-1).try_unsigned().is_err());
    assert!(GenericValue::Unsigned(u64::MAX).try_signed().is_err());
    assert_eq!(GenericValue::Unsigned(42).try_signed(), Ok(42));
    assert!(GenericValue::Double(f64::INFINITY).try_signed().is_err());
    assert!(GenericValue::Double(1e20).try_unsigned().is_err());
    assert_eq!(GenericValue::Double(-2.7).try_signed(), Ok(-2));
    assert_eq!(GenericValue::Unsigned(0x263A).try_char(), Ok('\u{263A}'));
    assert!(GenericValue::Unsigned(0xD800).try_char().is_err());
}

#[test]
fn test_checked_coercion_rejects_containers() {
    let err = GenericValue::Null.try_unsigned().unwrap_err();
    assert_eq!(
        err,
        ValueError::type_mismatch(Tag::Unsigned, Tag::Null)
    );
    assert!(sample_object().try_bool().is_err());
    assert!(GenericValue::Array(vec![]).try_double().is_err());
    assert!(GenericValue::Null.try_char().is_err());
}

// ===== Transition Tests =====

#[test]
fn test_every_tag_reaches_every_tag() {
    let mut value = GenericValue::Null;
    *value.set_char('q') = 'r';
    assert_eq!(value, GenericValue::Char('r'));
    value.set_string().push_str("text");
    assert_eq!(value.as_str(), Some("text"));
    *value.set_signed(-5) -= 1;
    assert_eq!(value, GenericValue::Signed(-6));
    value.set_array().push(1u8.into());
    assert_eq!(value.len(), 1);
    *value.set_unsigned(3) += 1;
    assert_eq!(value, GenericValue::Unsigned(4));
    value.set_object().insert("k".into(), GenericValue::Null);
    assert!(value.is_object());
    *value.set_double(1.0) *= 2.0;
    assert_eq!(value, GenericValue::Double(2.0));
    *value.set_bool(false) = true;
    assert_eq!(value, GenericValue::Bool(true));
    value.set_null();
    assert!(value.is_null());
}

#[test]
fn test_same_kind_set_clears_in_place() {
    let mut value = GenericValue::Null;
    value.set_array().extend((1u8..=3).map(GenericValue::from));
    let capacity = value.as_array().map(|a| a.capacity()).unwrap_or(0);

    let items = value.set_array();
    assert!(items.is_empty());
    assert_eq!(items.capacity(), capacity);

    value.set_string().push_str("hello");
    assert_eq!(value.set_string().len(), 0);

    value.set_object().insert("a".into(), GenericValue::Null);
    assert!(value.set_object().is_empty());
}

#[test]
fn test_scalar_set_same_kind_overwrites() {
    let mut value = GenericValue::Signed(1);
    assert_eq!(*value.set_signed(5), 5);
    assert_eq!(value, GenericValue::Signed(5));

    value.set_double(0.5);
    *value.set_double(1.5) += 1.0;
    assert_eq!(value, GenericValue::Double(2.5));

    let mut text = GenericValue::from("payload");
    assert!(!*text.set_bool(false));
    assert!(*text.set_bool(true));
    assert_eq!(*text.set_char('k'), 'k');
    assert_eq!(*text.set_unsigned(9), 9);
    assert_eq!(text, GenericValue::Unsigned(9));
}

// ===== Copy / Move Tests =====

#[test]
fn test_clone_is_deep() {
    let original = sample_object();
    let mut copy = original.clone();
    copy.at_key_mut("tags").unwrap().push("c").unwrap();
    copy.insert("name", "client").unwrap();

    assert_eq!(original["tags"].len(), 2);
    assert_eq!(original["name"].as_str(), Some("server"));
    assert_eq!(copy["tags"].len(), 3);
}

#[test]
fn test_original_mutation_leaves_clone() {
    let mut original = GenericValue::from("abc");
    let copy = original.clone();
    original.set_string().push_str("xyz");
    assert_eq!(copy.as_str(), Some("abc"));
}

#[test]
fn test_clone_from_reuses_and_copies() {
    let source = sample_object();
    let mut dest = GenericValue::Object(GenericObject::with_capacity(16));
    dest.clone_from(&source);
    assert_eq!(dest, source);

    let mut scalar = GenericValue::Bool(true);
    scalar.clone_from(&source);
    assert_eq!(scalar, source);
}

#[test]
fn test_take_leaves_null() {
    let mut source = sample_object();
    let expected = source.clone();
    let moved = source.take();
    assert!(source.is_null());
    assert_eq!(moved, expected);
}

#[test]
fn test_into_containers() {
    let array = GenericValue::Array(vec![1u8.into()]);
    assert_eq!(array.clone().into_array(), Some(vec![GenericValue::Unsigned(1)]));
    assert_eq!(array.into_object(), None);

    let object = sample_object();
    let fields = object.clone().into_object().unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(object.into_array(), None);
}

#[test]
fn test_replace_returns_previous() {
    let mut value = GenericValue::from(1u8);
    let previous = value.replace("new".into());
    assert_eq!(previous, GenericValue::Unsigned(1));
    assert_eq!(value.into_string(), Some("new".to_string()));
}

// ===== Access Tests =====

#[test]
fn test_checked_index_access() {
    let array = GenericValue::Array(vec![10u8.into(), 20u8.into()]);
    assert_eq!(array.at(1), Ok(&GenericValue::Unsigned(20)));
    assert_eq!(
        array.at(2),
        Err(ValueError::IndexOutOfBounds {
            index: 2,
            len: 2,
            code: Some(420)
        })
    );
    assert!(matches!(
        GenericValue::Null.at(0),
        Err(ValueError::TypeMismatch { expected: Tag::Array, found: Tag::Null, .. })
    ));
}

#[test]
fn test_checked_key_access() {
    let object = sample_object();
    assert_eq!(object.at_key("port").map(|v| v.get_unsigned()), Ok(8080));
    assert!(matches!(object.at_key("missing"), Err(ValueError::MissingKey { .. })));
    assert!(GenericValue::from("s").at_key("x").is_err());
}

#[test]
fn test_mutable_access() {
    let mut array = GenericValue::Array(vec![1u8.into(), 2u8.into()]);
    *array.get_mut(0).unwrap() = "first".into();
    assert_eq!(array[0].as_str(), Some("first"));
    assert!(array.get_mut(5).is_none());

    array.at_mut(1).unwrap().set_bool(true);
    assert_eq!(array[1], GenericValue::Bool(true));
    assert!(matches!(
        array.at_mut(2),
        Err(ValueError::IndexOutOfBounds { index: 2, len: 2, .. })
    ));
    assert!(GenericValue::Null.at_mut(0).is_err());

    let mut object = sample_object();
    object.get_key_mut("port").unwrap().set_unsigned(9090);
    assert_eq!(object["port"], GenericValue::Unsigned(9090));
    assert!(object.get_key_mut("missing").is_none());
    assert!(array.get_key_mut("port").is_none());
}

#[test]
fn test_index_operator_never_panics() {
    let object = sample_object();
    assert_eq!(object["tags"][1].as_str(), Some("b"));
    assert!(object["tags"][9].is_null());
    assert!(object["nope"]["deeper"].is_null());
    assert!(GenericValue::Unsigned(1)[0].is_null());
}

#[test]
fn test_push_and_insert_require_matching_tag() {
    let mut value = GenericValue::Null;
    assert!(value.push(1u8).is_err());
    assert!(value.insert("k", 1u8).is_err());

    value.set_array();
    value.push(1u8).unwrap();
    value.push("two").unwrap();
    assert_eq!(value.len(), 2);

    value.set_object();
    assert_eq!(value.insert("a", 1u8).unwrap(), None);
    assert_eq!(value.insert("b", 2u8).unwrap(), None);
    assert_eq!(value.insert("a", 3u8).unwrap(), Some(GenericValue::Unsigned(1)));
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_object_preserves_insertion_order() {
    let mut value = GenericValue::Null;
    let fields = value.set_object();
    for key in ["zeta", "alpha", "mid"] {
        fields.insert(key.into(), GenericValue::Null);
    }
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_display_is_compact() {
    let value = sample_object();
    assert_eq!(
        value.to_string(),
        r#"{"name": "server", "port": 8080, "tags": ["a", "b"]}"#
    );
    assert_eq!(GenericValue::Double(1.0).to_string(), "1.0");
    assert_eq!(GenericValue::Char('c').to_string(), "'c'");
}

// ===== Serde Tests =====

#[test]
fn test_serde_json_value_mapping() {
    let value = sample_object();
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"name":"server","port":8080,"tags":["a","b"]}"#);

    let back: GenericValue = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);

    let negative: GenericValue = serde_json::from_str("-3").unwrap();
    assert_eq!(negative, GenericValue::Signed(-3));
    let null: GenericValue = serde_json::from_str("null").unwrap();
    assert!(null.is_null());
}
