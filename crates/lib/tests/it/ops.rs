//! Tests for the projection and extraction operations.

use flatpath::{List, Map, Value, clone_deep, deselect, keys, many, remove_undefs, select, values};
use proptest::prelude::*;

use crate::helpers::{arb_structure, assert_json, json};

#[test]
fn test_select_exact_paths() {
    let subject = json(r#"{"c": 3, "d": {"e": 4, "f": [5, 6]}, "g": [7, 8]}"#);
    let picked = select(&subject, &["d.e", "d.f[].0", "g[].1"]).unwrap();
    assert_json(&picked, r#"{"d":{"e":4,"f":[5]},"g":[8]}"#);
}

#[test]
fn test_select_follows_request_order() {
    let subject = json(r#"{"a": 1, "b": 2}"#);
    let picked = select(&subject, &["b", "a"]).unwrap();
    assert_json(&picked, r#"{"b":2,"a":1}"#);
}

#[test]
fn test_select_list_subject_is_element_wise() {
    let subject = json(r#"[{"a": 1, "b": 2}, {"a": 3}, {"b": 4}]"#);
    let picked = select(&subject, &["a"]).unwrap();
    assert_json(&picked, r#"[{"a":1},{"a":3},{}]"#);
}

#[test]
fn test_select_accepts_path_macro_arguments() {
    let subject = json(r#"{"d": {"e": 4}, "g": [7, 8]}"#);
    let picked = select(&subject, &[flatpath::path!("d.e")]).unwrap();
    assert_json(&picked, r#"{"d":{"e":4}}"#);
}

#[test]
fn test_select_unknown_paths_are_omitted() {
    let subject = json(r#"{"a": 1}"#);
    assert_json(&select(&subject, &["zzz", "a.b.c"]).unwrap(), "{}");
}

#[test]
fn test_select_list_path_keeps_value_whole() {
    let subject = json(r#"{"g": [7, 8], "h": 9}"#);
    assert_json(&select(&subject, &["g"]).unwrap(), r#"{"g":[7,8]}"#);
}

#[test]
fn test_select_map_path_selects_nothing() {
    // Maps have no verbatim entry in the flattened form; only their leaf
    // paths are addressable.
    let subject = json(r#"{"d": {"e": 4}}"#);
    assert_json(&select(&subject, &["d"]).unwrap(), "{}");
    assert_json(&select(&subject, &["d.e"]).unwrap(), r#"{"d":{"e":4}}"#);
}

#[test]
fn test_deselect_exact_paths() {
    let subject = json(r#"{"a": 1, "b": 2, "c": 3}"#);
    assert_json(&deselect(&subject, &["a", "b"]).unwrap(), r#"{"c":3}"#);
}

#[test]
fn test_deselect_list_element() {
    let subject = json(r#"{"g": [7, 8], "h": 9}"#);
    assert_json(
        &deselect(&subject, &["g[].0"]).unwrap(),
        r#"{"g":[8],"h":9}"#,
    );
}

// Deselecting every element of a list leaves the list's own path in the
// remainder, and the verbatim entry brings the whole list back. Exact-match
// subtraction, not subtree removal; pinned on purpose.
#[test]
fn test_deselect_verbatim_list_survives_full_element_removal() {
    let subject = json(r#"{"g": [7, 8]}"#);
    assert_json(
        &deselect(&subject, &["g[].0", "g[].1"]).unwrap(),
        r#"{"g":[7,8]}"#,
    );
}

// On a list subject the subtracted key set is the deduplicated union of
// the per-element paths, and the removal applies element-wise.
#[test]
fn test_deselect_list_subject_unions_element_paths() {
    let subject = json(r#"[{"a": 1, "b": 2}, {"a": 3, "c": 4}]"#);
    let rest = deselect(&subject, &["a"]).unwrap();
    assert_json(&rest, r#"[{"b":2},{"c":4}]"#);

    // A path present in only one element still comes out of every element.
    let rest = deselect(&subject, &["c"]).unwrap();
    assert_json(&rest, r#"[{"a":1,"b":2},{"a":3}]"#);
}

#[test]
fn test_select_deselect_complement_on_flat_subject() {
    let subject = json(r#"{"a": 1, "b": 2, "c": 3, "d": 4}"#);
    let requested = ["b", "d"];

    let picked = select(&subject, &requested).unwrap();
    let rest = deselect(&subject, &requested).unwrap();

    let picked_keys = keys(&picked);
    let rest_keys = keys(&rest);
    assert_eq!(picked_keys, List::from(vec!["b", "d"]));
    assert_eq!(rest_keys, List::from(vec!["a", "c"]));
    for key in picked_keys.iter() {
        assert!(!rest_keys.iter().any(|k| k == key));
    }
}

#[test]
fn test_clone_deep_equality_and_idempotence() {
    let subject = json(r#"{"a": {"b": [1, {"c": 2}]}, "d": "x"}"#);
    let copy = clone_deep(&subject).unwrap();
    assert_eq!(copy, subject);
    assert_eq!(clone_deep(&copy).unwrap(), copy);
}

#[test]
fn test_clone_deep_leaves_and_lists() {
    assert_eq!(clone_deep(&Value::Int(7)).unwrap(), Value::Int(7));

    let subject = json(r#"[{"a": 1}, 2]"#);
    assert_eq!(clone_deep(&subject).unwrap(), subject);
}

#[test]
fn test_remove_undefs_strips_absent_preserving_order() {
    let subject = Value::Map(
        Map::new()
            .with("a", Value::Absent)
            .with_int("b", 2)
            .with_list(
                "c",
                List::from(vec![Value::Int(1), Value::Absent, Value::Int(3)]),
            )
            .with_map("d", Map::new().with("e", Value::Absent).with_int("f", 4)),
    );
    let cleaned = remove_undefs(&subject);
    assert_json(&cleaned, r#"{"b":2,"c":[1,3],"d":{"f":4}}"#);

    // The subject itself is untouched.
    assert!(subject.as_map().unwrap().contains_key("a"));
}

#[test]
fn test_many_repeats_or_passes_through() {
    let one = json(r#"{"a": 1}"#);
    let repeated = many(&one, 3);
    assert_eq!(repeated.len(), 3);
    assert!(repeated.iter().all(|v| *v == one));

    let already = json("[1, 2]");
    assert_eq!(many(&already, 3), List::from(vec![1, 2]));
    assert_eq!(many(&already, 0), List::from(vec![1, 2]));

    assert!(many(&Value::Int(1), 0).is_empty());
}

#[test]
fn test_values_collects_leaves_with_dedup() {
    let subject = json(r#"{"a": 1, "b": 2, "c": 3, "d": [4]}"#);
    assert_eq!(values(&subject), List::from(vec![1, 2, 3, 4]));

    let duplicated = json(r#"{"a": 1, "b": 1, "c": [2, 1]}"#);
    assert_eq!(values(&duplicated), List::from(vec![1, 2]));

    assert_eq!(values(&Value::Int(9)), List::from(vec![9]));
}

#[test]
fn test_keys_immediate_names_only_on_maps() {
    // Deliberate asymmetry with `values`: no descent into map properties.
    let subject = json(r#"{"a": {"deep": 1}, "b": 2}"#);
    assert_eq!(keys(&subject), List::from(vec!["a", "b"]));
}

#[test]
fn test_keys_recurses_through_lists() {
    let subject = json(r#"[{"a": 1}, {"b": 2}, "x", {"a": 3}]"#);
    assert_eq!(keys(&subject), List::from(vec!["a", "b", "x"]));

    assert_eq!(keys(&Value::Int(9)), List::from(vec![9]));
}

proptest! {
    #[test]
    fn prop_clone_deep_preserves_any_structure(subject in arb_structure()) {
        let copy = clone_deep(&subject).unwrap();
        prop_assert_eq!(copy, subject);
    }

    #[test]
    fn prop_select_all_leaf_paths_on_flat_maps(
        entries in proptest::collection::vec(("[a-z][a-z0-9]{0,4}", any::<i64>()), 1..6)
    ) {
        let mut map = Map::new();
        for (key, value) in &entries {
            map.insert(key.clone(), *value);
        }
        let subject = Value::Map(map);

        let paths: Vec<String> =
            subject.as_map().unwrap().keys().cloned().collect();
        let picked = select(&subject, &paths).unwrap();
        prop_assert_eq!(picked, subject);
    }
}
