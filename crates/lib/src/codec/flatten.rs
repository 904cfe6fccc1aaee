//! Flattening of nested structures into path-keyed mappings.

use crate::{flat::FlatMap, path::LIST_MARKER, value::Value};

use super::Flattened;

/// Flattens a nested structure into a path-keyed mapping.
///
/// Leaves are stored at their dot-joined path. A map contributes no entry
/// of its own, only the recursively flattened entries of its properties. A
/// list contributes *two* kinds of entries: its verbatim value at its own
/// path (final segment unmarked) and the recursively flattened entries of
/// its elements, whose paths carry the `[]` marker on the segment leading
/// into the list. A primitive subject flattens to an empty mapping, as do
/// empty containers.
///
/// A top-level list is special: it flattens to one mapping per element
/// ([`Flattened::Seq`]), kept separate rather than merged, while a list
/// nested inside a map flattens into the single mapping keyed by index
/// paths under the map's path.
///
/// Flat keys are verbatim dot-joins of the subject's own key and index
/// segments, not normalized paths. An empty map key survives as an empty
/// segment (`{"a": {"": 2}}` stores `a.`, an empty key at the root stores
/// the empty string) and [`expand`](super::expand) rebuilds it. A key that
/// itself contains a dot or ends in the `[]` marker is indistinguishable
/// from path structure once joined: `{"a.b": 1}` stores the same entry as
/// a nested `b` under `a`, and expand reinterprets it as the nested form.
/// Such keys are outside the encoding's domain, like the numeric-string
/// map keys documented on `expand`.
///
/// # Examples
///
/// ```
/// # use flatpath::{codec::flatten, Value};
/// let subject = Value::from_json_str(r#"{"a": {"b": {"c": 1, "d": [2, 3]}}}"#)?;
/// let flat = flatten(&subject).into_map().unwrap();
///
/// let paths: Vec<&String> = flat.keys().collect();
/// assert_eq!(paths, ["a.b.c", "a.b.d", "a.b.d[].0", "a.b.d[].1"]);
/// assert_eq!(flat.get("a.b.c"), Some(&Value::Int(1)));
/// assert_eq!(flat.get("a.b.d[].1"), Some(&Value::Int(3)));
/// # Ok::<(), flatpath::Error>(())
/// ```
pub fn flatten(subject: &Value) -> Flattened {
    match subject {
        Value::List(list) => Flattened::Seq(list.iter().map(flatten_single).collect()),
        _ => Flattened::Map(flatten_single(subject)),
    }
}

/// Flattens one subject into a single mapping.
///
/// Used for map subjects, for each element of a top-level list, and by the
/// projection operations that need direct mapping access.
pub(crate) fn flatten_single(subject: &Value) -> FlatMap {
    let mut out = FlatMap::new();
    flatten_into(subject, None, &mut out);
    out
}

/// Joins a child segment onto a prefix verbatim. `None` is the root; the
/// join never normalizes, so empty segments and whatever characters the
/// subject's keys carry pass through untouched.
fn join(prefix: Option<&str>, segment: &str) -> String {
    match prefix {
        None => segment.to_string(),
        Some(prefix) => format!("{prefix}.{segment}"),
    }
}

/// Records `value`'s children under `prefix`, depth-first, so each
/// container's entries precede its descendants' entries.
fn flatten_into(value: &Value, prefix: Option<&str>, out: &mut FlatMap) {
    match value {
        Value::Map(map) => {
            for (key, child) in map.iter() {
                record_child(key, child, prefix, out);
            }
        }
        Value::List(list) => {
            for (index, child) in list.iter().enumerate() {
                record_child(&index.to_string(), child, prefix, out);
            }
        }
        _ => {}
    }
}

fn record_child(segment: &str, child: &Value, prefix: Option<&str>, out: &mut FlatMap) {
    let stored = join(prefix, segment);
    match child {
        Value::Map(_) => {
            flatten_into(child, Some(&stored), out);
        }
        Value::List(_) => {
            // The list's own path stays unmarked; the marker decorates the
            // edge into the list, so only element paths carry it.
            out.insert(stored, child.clone());
            let marked = join(prefix, &format!("{segment}{LIST_MARKER}"));
            flatten_into(child, Some(&marked), out);
        }
        leaf => {
            out.insert(stored, leaf.clone());
        }
    }
}
