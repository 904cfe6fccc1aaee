//! Tests for the flatten/expand codec and the dot-path encoding.

use flatpath::{
    FlatMap, Value,
    codec::{Flattened, expand, flatten},
};
use proptest::prelude::*;

use crate::helpers::{arb_map_subject, assert_json, flat_map, json};

// The exact key strings are the crate's one interop contract.
#[test]
fn test_flatten_concrete_path_strings() {
    let subject = json(r#"{"a": {"b": {"c": 1, "d": [2, 3]}}}"#);
    let flat = flatten(&subject).into_map().unwrap();

    let paths: Vec<&String> = flat.keys().collect();
    assert_eq!(paths, ["a.b.c", "a.b.d", "a.b.d[].0", "a.b.d[].1"]);

    assert_eq!(flat.get("a.b.c"), Some(&Value::Int(1)));
    assert_eq!(flat.get("a.b.d"), Some(&json("[2, 3]")));
    assert_eq!(flat.get("a.b.d[].0"), Some(&Value::Int(2)));
    assert_eq!(flat.get("a.b.d[].1"), Some(&Value::Int(3)));
}

#[test]
fn test_flatten_primitive_yields_empty_mapping() {
    assert!(flatten(&Value::Int(5)).into_map().unwrap().is_empty());
    assert!(flatten(&Value::Null).into_map().unwrap().is_empty());
    assert!(
        flatten(&Value::Text("x".into()))
            .into_map()
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_round_trip_mixed_structures() {
    let fixtures = [
        r#"{"a": {"b": {"c": 1, "d": [2, 3]}}}"#,
        r#"{"a": [{"b": 1, "c": 2}]}"#,
        r#"{"a": [[1, 2], [3]]}"#,
        r#"{"a": []}"#,
        r#"{"a": [[]]}"#,
        r#"{"a": [[], 1]}"#,
        r#"{"x": null, "y": true, "z": "s"}"#,
        r#"{"mixed": [1, {"deep": [true, null]}, "tail"]}"#,
        r#"{}"#,
    ];
    for fixture in fixtures {
        let subject = json(fixture);
        let rebuilt = flatten(&subject).expand().unwrap();
        assert_eq!(rebuilt, subject, "round trip failed for {fixture}");
    }
}

#[test]
fn test_top_level_list_flattens_per_element() {
    let subject = json(r#"[{"a": 1}, {"b": {"c": 2}}]"#);

    let flat = flatten(&subject);
    let seq = flat.as_seq().unwrap();
    assert_eq!(seq.len(), 2);
    assert_eq!(seq[0].get("a"), Some(&Value::Int(1)));
    assert_eq!(seq[1].get("b.c"), Some(&Value::Int(2)));

    assert_eq!(flat.expand().unwrap(), subject);
}

#[test]
fn test_flattened_paths_dedup_across_seq() {
    let subject = json(r#"[{"a": 1}, {"a": 2, "b": 3}]"#);
    assert_eq!(flatten(&subject).paths(), ["a", "b"]);
}

#[test]
fn test_expand_root_list_detection() {
    let flat = flat_map(&[("0", Value::Text("x".into())), ("1", Value::Text("y".into()))]);
    assert_json(&expand(&flat).unwrap(), r#"["x","y"]"#);
}

#[test]
fn test_expand_empty_mapping_is_empty_map() {
    assert_json(&expand(&FlatMap::new()).unwrap(), "{}");
}

#[test]
fn test_expand_collapses_verbatim_list_entry() {
    // A list's verbatim entry is redundant next to its element entries and
    // must not double anything up.
    let flat = flat_map(&[
        ("g", json("[7, 8]")),
        ("g[].0", Value::Int(7)),
        ("g[].1", Value::Int(8)),
    ]);
    assert_json(&expand(&flat).unwrap(), r#"{"g":[7,8]}"#);
}

#[test]
fn test_expand_sparse_indices_compact() {
    let flat = flat_map(&[("g[].1", Value::Int(8))]);
    assert_json(&expand(&flat).unwrap(), r#"{"g":[8]}"#);
}

#[test]
fn test_expand_malformed_marker_is_an_error() {
    let flat = flat_map(&[("a[].b", Value::Int(1))]);
    let err = expand(&flat).unwrap_err();
    assert!(err.is_malformed_path());
    assert_eq!(err.path(), Some("a[].b"));

    let crate_err: flatpath::Error = err.into();
    assert!(crate_err.is_malformed_path());
    assert_eq!(crate_err.module(), "codec");
}

// Flat keys are verbatim joins, so an empty map key survives as an empty
// path segment instead of vanishing under normalization.
#[test]
fn test_round_trip_empty_map_keys() {
    let subject = json(r#"{"a": {"x": 1, "": 2}}"#);
    let flat = flatten(&subject).into_map().unwrap();
    let paths: Vec<&String> = flat.keys().collect();
    assert_eq!(paths, ["a.x", "a."]);
    assert_eq!(expand(&flat).unwrap(), subject);

    for fixture in [r#"{"": 2}"#, r#"{"": {"b": 1}}"#, r#"{"": [7, 8]}"#] {
        let subject = json(fixture);
        let rebuilt = flatten(&subject).expand().unwrap();
        assert_eq!(rebuilt, subject, "round trip failed for {fixture}");
    }
}

// A key containing a dot is outside the encoding's domain: it joins into
// the same flat entry a nested structure would produce, and expand rebuilds
// the nested form.
#[test]
fn test_dot_in_key_conflates_with_nested_path() {
    let subject = json(r#"{"a.b": 1}"#);
    let flat = flatten(&subject).into_map().unwrap();
    assert_eq!(flat.get("a.b"), Some(&Value::Int(1)));
    assert_json(&expand(&flat).unwrap(), r#"{"a":{"b":1}}"#);
}

#[test]
fn test_flattened_accessors() {
    let map_result = flatten(&json(r#"{"a": 1}"#));
    assert!(map_result.as_map().is_some());
    assert!(map_result.as_seq().is_none());

    let seq_result = flatten(&json(r#"[{"a": 1}]"#));
    assert!(seq_result.as_map().is_none());
    assert!(matches!(seq_result, Flattened::Seq(_)));
}

proptest! {
    #[test]
    fn prop_flatten_expand_round_trip(subject in arb_map_subject()) {
        let flat = flatten(&subject).into_map().unwrap();
        prop_assert_eq!(expand(&flat).unwrap(), subject);
    }

    #[test]
    fn prop_shallow_is_idempotent(subject in arb_map_subject()) {
        let flat = flatten(&subject).into_map().unwrap();
        let roots = flat.shallow();
        prop_assert_eq!(roots.shallow(), roots);
    }
}
