use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_numeric_text_accepts_minus_point_and_commas() {
    assert_eq!(numeric_text("42"), Some(42.0));
    assert_eq!(numeric_text("-5"), Some(-5.0));
    assert_eq!(numeric_text("1,000,000"), Some(1_000_000.0));
    assert_eq!(numeric_text("12.5"), Some(12.5));
    assert_eq!(numeric_text("-0.25"), Some(-0.25));
}

#[test]
fn test_numeric_text_rejects_malformed_shapes() {
    assert_eq!(numeric_text(""), None);
    assert_eq!(numeric_text("1-2"), None);
    assert_eq!(numeric_text("--3"), None);
    assert_eq!(numeric_text("1.2.3"), None);
    assert_eq!(numeric_text("12a"), None);
    assert_eq!(numeric_text("-"), None);
}

#[test]
fn test_non_numeric_text_coerces_to_its_length() {
    let value = Value::Text("hello".to_string());
    assert_eq!(value.to_number(), 5);
    assert_eq!(value.to_decimal(), 5.0);

    let malformed = Value::Text("1-2".to_string());
    assert_eq!(malformed.to_number(), 3);
}

#[test]
fn test_numeric_text_coerces_to_its_value() {
    let value = Value::Text("1,200".to_string());
    assert_eq!(value.to_number(), 1200);
    assert_eq!(value.to_decimal(), 1200.0);

    let truncating = Value::Text("12.9".to_string());
    assert_eq!(truncating.to_number(), 12);
}

#[test]
fn test_binary_coerces_through_decimal() {
    let samples = [
        Value::Text("hello".to_string()),
        Value::Text(String::new()),
        Value::Text("0".to_string()),
        Value::Number(-3),
        Value::Number(0),
        Value::Decimal(0.5),
        Value::Binary(true),
        Value::Binary(false),
        Value::Void,
        Value::Collection(CollectionValue::auto_indexed(vec![Value::Number(1)])),
        Value::Collection(CollectionValue::default()),
    ];
    for value in samples {
        assert_eq!(value.to_binary(), value.to_decimal() != 0.0, "{value:?}");
    }
}

#[test]
fn test_void_coerces_to_zero_values() {
    assert_eq!(Value::Void.to_text(), "");
    assert_eq!(Value::Void.to_number(), 0);
    assert_eq!(Value::Void.to_decimal(), 0.0);
    assert!(!Value::Void.to_binary());
}

#[test]
fn test_binary_text_keywords() {
    assert_eq!(Value::Binary(true).to_text(), "TRUE");
    assert_eq!(Value::Binary(false).to_text(), "FALSE");
    assert_eq!(Value::Binary(true).to_number(), 1);
}

#[test]
fn test_decimal_text_keeps_trailing_zero_when_integral() {
    assert_eq!(Value::Decimal(120.0).to_text(), "120.0");
    assert_eq!(Value::Decimal(0.5).to_text(), "0.5");
    assert_eq!(Value::Decimal(-3.0).to_text(), "-3.0");
}

#[test]
fn test_collection_auto_indexing_fills_from_zero() {
    let collection = CollectionValue::auto_indexed(vec![
        Value::Text("a".to_string()),
        Value::Text("b".to_string()),
        Value::Text("c".to_string()),
    ]);
    let keys: Vec<i64> = collection
        .entries()
        .iter()
        .map(|(key, _)| key.to_number())
        .collect();
    assert_eq!(keys, vec![0, 1, 2]);
}

#[test]
fn test_collection_auto_indexing_fills_gaps() {
    let mut collection = CollectionValue::default();
    collection.push_keyed(Value::Number(0), Value::Text("x".to_string()));
    collection.push_keyed(Value::Number(2), Value::Text("y".to_string()));
    collection.push_auto(Value::Text("z".to_string()));
    assert_eq!(collection.entries()[2].0, Value::Number(1));
    collection.push_auto(Value::Text("w".to_string()));
    assert_eq!(collection.entries()[3].0, Value::Number(3));
}

#[test]
fn test_collection_lookup_matches_numerically_across_kinds() {
    let mut collection = CollectionValue::default();
    collection.push_keyed(Value::Number(1), Value::Text("one".to_string()));
    assert_eq!(
        collection.get(&Value::Decimal(1.0)),
        Some(&Value::Text("one".to_string()))
    );
    assert_eq!(collection.get(&Value::Text("1".to_string())), None);
    assert_eq!(collection.get(&Value::Number(2)), None);
}

#[test]
fn test_collection_lookup_returns_first_match() {
    let mut collection = CollectionValue::default();
    collection.push_keyed(Value::Text("k".to_string()), Value::Number(1));
    collection.push_keyed(Value::Text("k".to_string()), Value::Number(2));
    assert_eq!(collection.get(&Value::Text("k".to_string())), Some(&Value::Number(1)));
}

#[test]
fn test_collection_to_text_joins_and_skips_empty() {
    let collection = CollectionValue::new(
        vec![
            (Value::Number(0), Value::Text("a".to_string())),
            (Value::Number(1), Value::Void),
            (Value::Number(2), Value::Text("b".to_string())),
        ],
        ", ",
    );
    assert_eq!(collection.to_text(), "a, b");
}

#[test]
fn test_collection_coerces_to_its_length() {
    let collection = Value::Collection(CollectionValue::auto_indexed(vec![
        Value::Number(1),
        Value::Number(2),
    ]));
    assert_eq!(collection.to_number(), 2);
    assert!(collection.to_binary());
}

#[test]
fn test_packet_coerces_through_its_value() {
    let packet = Value::Packet(Box::new(PacketValue {
        key: Value::Text("k".to_string()),
        value: Value::Number(7),
    }));
    assert_eq!(packet.to_text(), "7");
    assert_eq!(packet.to_number(), 7);
    assert!(packet.to_binary());
}

#[test]
fn test_from_chars_indexes_characters() {
    let collection = CollectionValue::from_chars("hi");
    assert_eq!(
        collection.get(&Value::Number(1)),
        Some(&Value::Text("i".to_string()))
    );
    assert_eq!(collection.len(), 2);
}

#[test]
fn test_primitive_round_trip() {
    let value = Value::Number(9);
    assert_eq!(Value::from_primitive(value.to_primitive()), value);
    let complex = Value::Collection(CollectionValue::auto_indexed(vec![Value::Number(1)]));
    assert_eq!(complex.to_primitive(), Primitive::Text("1".to_string()));
}
