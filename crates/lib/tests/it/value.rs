//! Tests for the Value, List, and Map model.

use flatpath::{List, Map, Value};

use crate::helpers::{assert_json, json};

#[test]
fn test_kind_classification() {
    assert_eq!(Value::Null.kind(), "null");
    assert_eq!(Value::Bool(true).kind(), "bool");
    assert_eq!(Value::Int(1).kind(), "int");
    assert_eq!(Value::Float(1.5).kind(), "float");
    assert_eq!(Value::Text("x".into()).kind(), "text");
    assert_eq!(Value::List(List::new()).kind(), "list");
    assert_eq!(Value::Map(Map::new()).kind(), "map");
    assert_eq!(Value::Absent.kind(), "absent");

    assert!(Value::Int(1).is_leaf());
    assert!(Value::Null.is_leaf());
    assert!(Value::Absent.is_leaf());
    assert!(Value::Map(Map::new()).is_branch());
    assert!(Value::List(List::new()).is_branch());
}

#[test]
fn test_accessors() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Int(42).as_int(), Some(42));
    assert_eq!(Value::Float(2.5).as_float(), Some(2.5));
    assert_eq!(Value::Text("hi".into()).as_text(), Some("hi"));
    assert_eq!(Value::Int(42).as_text(), None);

    let mut value = json(r#"{"a": [1]}"#);
    assert!(value.as_map().is_some());
    value
        .as_map_mut()
        .unwrap()
        .get_mut("a")
        .unwrap()
        .as_list_mut()
        .unwrap()
        .push(2);
    assert_json(&value, r#"{"a":[1,2]}"#);
}

#[test]
fn test_from_and_partial_eq_with_primitives() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7i64), Value::Int(7));
    assert_eq!(Value::from(7i32), Value::Int(7));
    assert_eq!(Value::from(2.5f64), Value::Float(2.5));
    assert_eq!(Value::from("s"), Value::Text("s".into()));
    assert_eq!(Value::from(vec![1, 2]), json("[1, 2]"));
    assert_eq!(Value::from(Option::<i64>::None), Value::Absent);
    assert_eq!(Value::from(Some(3i64)), Value::Int(3));

    assert!(Value::Text("hello".into()) == "hello");
    assert!("hello" == Value::Text("hello".into()));
    assert!(Value::Int(42) == 42);
    assert!(Value::Bool(true) == true);
    assert!(Value::Float(2.5) == 2.5);
    assert!(!(Value::Text("42".into()) == 42));
}

#[test]
fn test_merge_right_hand_wins_on_leaves() {
    let mut left = Value::Int(1);
    left.merge(&Value::Int(2));
    assert_eq!(left, Value::Int(2));

    let mut mismatched = Value::Text("x".into());
    mismatched.merge(&json("[1]"));
    assert_json(&mismatched, "[1]");
}

#[test]
fn test_merge_maps_recursively() {
    let mut left = json(r#"{"a": {"x": 1, "y": 2}, "b": 1}"#);
    left.merge(&json(r#"{"a": {"y": 20, "z": 30}, "c": 3}"#));
    assert_json(&left, r#"{"a":{"x":1,"y":20,"z":30},"b":1,"c":3}"#);
}

#[test]
fn test_merge_lists_element_wise_with_holes() {
    let mut left = Value::List(List::from(vec![Value::Int(7)]));
    left.merge(&Value::List(List::from(vec![Value::Absent, Value::Int(8)])));
    assert_eq!(left, Value::List(List::from(vec![7, 8])));

    // An absent element here is filled by a present incoming one.
    let mut holes = Value::List(List::from(vec![Value::Absent, Value::Int(2)]));
    holes.merge(&Value::List(List::from(vec![Value::Int(1)])));
    assert_eq!(holes, Value::List(List::from(vec![1, 2])));

    // Same-index collisions recurse.
    let mut nested = json(r#"[{"a": 1}]"#);
    nested.merge(&json(r#"[{"b": 2}]"#));
    assert_json(&nested, r#"[{"a":1,"b":2}]"#);
}

#[test]
fn test_json_round_trip_preserves_order() {
    let source = r#"{"b":2,"a":{"z":[1,null],"y":true},"c":"s"}"#;
    assert_eq!(json(source).to_json_string(), source);
}

#[test]
fn test_json_null_and_absent() {
    // JSON null parses to the real Null leaf, never to Absent.
    assert_eq!(json("null"), Value::Null);
    assert!(!json("null").is_absent());

    // Absent serializes as null; the distinction is lossy on the way out.
    assert_eq!(Value::Absent.to_json_string(), "null");
}

#[test]
fn test_from_json_str_rejects_malformed_input() {
    let err = Value::from_json_str("{not json").unwrap_err();
    assert_eq!(err.module(), "serialize");
}

#[test]
fn test_list_api() {
    let mut list = List::new();
    assert_eq!(list.push(10), 0);
    assert_eq!(list.push("x"), 1);
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0), Some(&Value::Int(10)));
    assert_eq!(list.get(5), None);

    list.clear();
    assert!(list.is_empty());
}

#[test]
fn test_map_api() {
    let mut map = Map::new();
    assert_eq!(map.insert("a", 1), None);
    assert_eq!(map.insert("a", 2), Some(Value::Int(1)));
    map.insert("b", 3);
    assert!(map.contains_key("a"));

    assert_eq!(map.remove("a"), Some(Value::Int(2)));
    assert!(!map.contains_key("a"));
    assert_eq!(map.len(), 1);

    let built = Map::new()
        .with_text("name", "n")
        .with_int("count", 2)
        .with_list("tags", List::from(vec!["t"]))
        .with_map("inner", Map::new().with_bool("flag", true));
    assert_json(
        &Value::Map(built),
        r#"{"name":"n","count":2,"tags":["t"],"inner":{"flag":true}}"#,
    );
}

#[test]
fn test_display() {
    assert_eq!(Value::Int(1).to_string(), "1");
    assert_eq!(Value::Text("s".into()).to_string(), "s");
    assert_eq!(json("[1, 2]").to_string(), "[1, 2]");
    assert_eq!(json(r#"{"a": 1}"#).to_string(), "{a: 1}");
    assert_eq!(Value::Absent.to_string(), "<absent>");
}
