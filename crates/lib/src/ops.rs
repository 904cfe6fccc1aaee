//! Operations composed over the flatten/expand codec.
//!
//! Projection ([`select`], [`deselect`]), structural utilities
//! ([`clone_deep`], [`remove_undefs`], [`many`]), and key/value extraction
//! ([`keys`], [`values`]). All are pure: the subject is never mutated, and
//! misuse (an unknown path, a missing key) resolves to omission rather than
//! failure.

use crate::{
    codec::{expand, flatten, flatten_single},
    flat::FlatMap,
    value::{List, Value},
};

/// Filters a structure down to a requested set of exact dot-paths.
///
/// A list subject applies select element-wise and collects the sub-results
/// into a list (one per element, never merged). A map subject is flattened,
/// reduced to the entries whose path exactly equals one of `paths` (no
/// prefix or wildcard semantics), and expanded back into nested form. Map
/// keys in the result follow request order; reconstructed list elements
/// follow their numeric indices, with unselected positions compacted away.
/// Paths not present in the subject are silently omitted.
///
/// A requested path may name a list, in which case the list's verbatim
/// value is kept whole. Map containers have no entry of their own in the
/// flattened form, so requesting a map's path selects nothing; request its
/// leaf paths instead.
///
/// # Examples
///
/// ```
/// # use flatpath::{ops::select, Value};
/// let subject = Value::from_json_str(r#"{"c":3,"d":{"e":4,"f":[5,6]},"g":[7,8]}"#)?;
/// let picked = select(&subject, &["d.e", "d.f[].0", "g[].1"])?;
/// assert_eq!(picked.to_json_string(), r#"{"d":{"e":4,"f":[5]},"g":[8]}"#);
/// # Ok::<(), flatpath::Error>(())
/// ```
pub fn select<S: AsRef<str>>(subject: &Value, paths: &[S]) -> crate::Result<Value> {
    if let Value::List(list) = subject {
        let mut out = List::new();
        for element in list.iter() {
            out.push(select(element, paths)?);
        }
        return Ok(Value::List(out));
    }

    let flat = flatten_single(subject);
    let mut filtered = FlatMap::new();
    for path in paths {
        let path = path.as_ref();
        if let Some(value) = flat.get(path) {
            filtered.insert(path, value.clone());
        }
    }
    Ok(expand(&filtered)?)
}

/// Filters a structure down to everything *except* a requested set of
/// exact dot-paths.
///
/// Collects the subject's full flat key set (list container paths
/// included — on a flattened mapping the immediate keys are the full
/// dot-paths), subtracts `paths` by exact string equality, and delegates
/// to [`select`] with the remainder.
///
/// Because a list's path carries its value verbatim, deselecting every
/// element path of a list while leaving the list's own path in the
/// remainder re-introduces the whole list through the verbatim entry; the
/// operation is exact-match subtraction, not subtree removal.
///
/// # Examples
///
/// ```
/// # use flatpath::{ops::deselect, Value};
/// let subject = Value::from_json_str(r#"{"a":1,"b":2,"c":3}"#)?;
/// let rest = deselect(&subject, &["a", "b"])?;
/// assert_eq!(rest.to_json_string(), r#"{"c":3}"#);
/// # Ok::<(), flatpath::Error>(())
/// ```
pub fn deselect<S: AsRef<str>>(subject: &Value, paths: &[S]) -> crate::Result<Value> {
    let all = flatten(subject).paths();
    let keep: Vec<&str> = all
        .iter()
        .map(String::as_str)
        .filter(|candidate| !paths.iter().any(|p| p.as_ref() == *candidate))
        .collect();
    select(subject, &keep)
}

/// Produces a structurally equal, reference-independent copy of a
/// structure by round-tripping containers through the codec.
///
/// Maps go through `expand(flatten(..))`; list subjects clone element-wise
/// with the same rule; leaves (including values the codec does not
/// classify as containers) pass through as plain clones. Empty maps nested
/// inside maps do not survive the round trip and are dropped from the
/// copy.
///
/// # Examples
///
/// ```
/// # use flatpath::{ops::clone_deep, Value};
/// let subject = Value::from_json_str(r#"{"a":{"b":[1,2]}}"#)?;
/// let copy = clone_deep(&subject)?;
/// assert_eq!(copy, subject);
/// # Ok::<(), flatpath::Error>(())
/// ```
pub fn clone_deep(subject: &Value) -> crate::Result<Value> {
    match subject {
        Value::List(list) => {
            let mut out = List::new();
            for element in list.iter() {
                out.push(clone_deep(element)?);
            }
            Ok(Value::List(out))
        }
        Value::Map(_) => Ok(expand(&flatten_single(subject))?),
        leaf => Ok(leaf.clone()),
    }
}

/// Recursively strips [`Value::Absent`] entries from a structure.
///
/// Map entries whose value is absent are dropped; absent list elements are
/// omitted with the order of the remaining elements preserved. The caller's
/// structure is never mutated. `Null` is a real leaf and is kept.
///
/// # Examples
///
/// ```
/// # use flatpath::{ops::remove_undefs, List, Map, Value};
/// let subject = Value::Map(
///     Map::new()
///         .with("a", Value::Absent)
///         .with_int("b", 2)
///         .with_list("c", List::from(vec![Value::Int(1), Value::Absent, Value::Int(3)])),
/// );
/// let cleaned = remove_undefs(&subject);
/// assert_eq!(cleaned.to_json_string(), r#"{"b":2,"c":[1,3]}"#);
/// ```
pub fn remove_undefs(subject: &Value) -> Value {
    match subject {
        Value::Map(map) => {
            let mut out = crate::value::Map::new();
            for (key, value) in map.iter() {
                if !value.is_absent() {
                    out.insert(key.clone(), remove_undefs(value));
                }
            }
            Value::Map(out)
        }
        Value::List(list) => {
            let mut out = List::new();
            for value in list.iter() {
                if !value.is_absent() {
                    out.push(remove_undefs(value));
                }
            }
            Value::List(out)
        }
        leaf => leaf.clone(),
    }
}

/// Repeats a subject into a list.
///
/// A list subject is returned unchanged (`count` is ignored). Any other
/// subject yields a list of `count` clones. Owned values cannot alias, so
/// repetition clones; callers that relied on shared mutation in dynamic
/// renditions of this contract get independent copies here.
///
/// # Examples
///
/// ```
/// # use flatpath::{ops::many, List, Map, Value};
/// let one = Value::Map(Map::new().with_int("a", 1));
/// assert_eq!(many(&one, 3).len(), 3);
///
/// let already = Value::List(List::from(vec![1, 2]));
/// assert_eq!(many(&already, 3), List::from(vec![1, 2]));
/// ```
pub fn many(subject: &Value, count: usize) -> List {
    if let Value::List(list) = subject {
        return list.clone();
    }
    let mut out = List::new();
    for _ in 0..count {
        out.push(subject.clone());
    }
    out
}

/// Collects every leaf value reachable from a subject, deduplicated in
/// first-occurrence order.
///
/// Walks into lists element-by-element and into maps property-by-property.
/// A leaf subject yields a one-element list containing itself.
///
/// # Examples
///
/// ```
/// # use flatpath::{ops::values, List, Value};
/// let subject = Value::from_json_str(r#"{"a":1,"b":2,"c":3,"d":[4]}"#)?;
/// assert_eq!(values(&subject), List::from(vec![1, 2, 3, 4]));
/// # Ok::<(), flatpath::Error>(())
/// ```
pub fn values(subject: &Value) -> List {
    let mut collected = Vec::new();
    collect_leaves(subject, &mut collected);
    uniques(collected)
}

fn collect_leaves(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::Map(map) => {
            for child in map.values() {
                collect_leaves(child, out);
            }
        }
        Value::List(list) => {
            for child in list.iter() {
                collect_leaves(child, out);
            }
        }
        leaf => out.push(leaf.clone()),
    }
}

/// Collects a subject's keys, deduplicated in first-occurrence order.
///
/// A map subject yields its *immediate* property names as text values —
/// deliberately without descending into the property values, asymmetric
/// with [`values`]. A list subject concatenates the recursive `keys` of
/// each element. A leaf subject yields a one-element list containing
/// itself.
///
/// The no-descent contract makes this suitable for leaf-path discovery
/// only when applied to an already-flattened mapping, where the immediate
/// keys are the full dot-paths; on an arbitrary nested structure it
/// reports only the first level of names.
///
/// # Examples
///
/// ```
/// # use flatpath::{ops::keys, List, Value};
/// let subject = Value::from_json_str(r#"{"a":{"deep":1},"b":2}"#)?;
/// assert_eq!(keys(&subject), List::from(vec!["a", "b"]));
/// # Ok::<(), flatpath::Error>(())
/// ```
pub fn keys(subject: &Value) -> List {
    let mut collected = Vec::new();
    collect_keys(subject, &mut collected);
    uniques(collected)
}

fn collect_keys(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::Map(map) => {
            for key in map.keys() {
                out.push(Value::Text(key.clone()));
            }
        }
        Value::List(list) => {
            for child in list.iter() {
                collect_keys(child, out);
            }
        }
        leaf => out.push(leaf.clone()),
    }
}

/// First-seen-order deduplication.
///
/// Quadratic membership scan; `Value` has no total ordering or hash (float
/// leaves), and the sequences involved are small.
fn uniques(items: Vec<Value>) -> List {
    let mut out: Vec<Value> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    List::from(out)
}
