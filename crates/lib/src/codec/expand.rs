//! Expansion of path-keyed mappings back into nested structures.

use crate::{
    flat::FlatMap,
    path::{is_index, split_marker},
    value::{List, Map, Value},
};

use super::errors::CodecError;

/// Expands a flat mapping into a nested structure.
///
/// Inverts [`flatten`](super::flatten) for any mapping produced by it: the
/// mapping is first reduced to its shallow roots (a list's verbatim entry
/// collapses to its element entries), then each remaining path is rebuilt
/// into a partial structure and the partials are deep-merged. Lists
/// reappear wherever a path segment carries the `[]` marker; the numeric
/// index segment fixes each element's position, missing positions are
/// padded with [`Value::Absent`] holes during the merge, and holes left
/// over at the end are dropped. Expanding `g[].1` alone therefore yields
/// `g: [v]`, while `g[].0` and `g[].1` together rebuild a two-element list
/// regardless of entry order.
///
/// If every shallow root begins with a decimal digit the root itself is a
/// list, built by pushing each value in key-iteration order. A map whose
/// keys merely look numeric is indistinguishable from a list here; such
/// structures are a documented limitation of the encoding. An empty mapping
/// expands to an empty map.
///
/// Paths are split on dots verbatim; an empty segment addresses an empty
/// map key, so `a.` rebuilds `{"a": {"": ..}}` and the empty string key
/// rebuilds `{"": ..}` at the root.
///
/// # Errors
///
/// Mappings produced by flatten never fail. A hand-built mapping returns
/// [`CodecError::MalformedPath`] when a non-numeric segment follows a
/// marker-bearing segment or an index does not fit in memory.
///
/// # Examples
///
/// ```
/// # use flatpath::{codec::expand, FlatMap, Value};
/// let mut flat = FlatMap::new();
/// flat.insert("a.b.c", 1);
/// flat.insert("a.b.d[].0", 2);
/// flat.insert("a.b.d[].1", 3);
///
/// let value = expand(&flat)?;
/// assert_eq!(value.to_json_string(), r#"{"a":{"b":{"c":1,"d":[2,3]}}}"#);
/// # Ok::<(), flatpath::Error>(())
/// ```
pub fn expand(flat: &FlatMap) -> Result<Value, CodecError> {
    let roots = flat.shallow();

    if roots.is_empty() {
        return Ok(Value::Map(Map::new()));
    }

    // Root-kind detection: an all-numeric key set means the root is a list.
    if roots
        .keys()
        .all(|key| key.starts_with(|c: char| c.is_ascii_digit()))
    {
        let mut list = List::new();
        for value in roots.values() {
            list.push(value.clone());
        }
        return Ok(Value::List(list));
    }

    let mut result = Value::Map(Map::new());
    for (path, value) in roots.iter() {
        let partial = expand_single(path, value)?;
        result.merge(&partial);
    }
    Ok(strip_holes(result))
}

/// Rebuilds the nested structure for one path-value pair.
///
/// Walks the segments right to left, wrapping the value in one container
/// per segment: a list with the value at its numeric index (absent holes
/// before it) when the segment to the left carries the marker, a
/// single-entry map (marker stripped from the key) otherwise.
fn expand_single(path: &str, value: &Value) -> Result<Value, CodecError> {
    // The empty string splits to one empty segment, the root's "" key.
    let segments: Vec<&str> = path.split('.').collect();
    let mut acc = value.clone();

    for i in (0..segments.len()).rev() {
        let parent_is_list = i > 0 && split_marker(segments[i - 1]).1;
        if parent_is_list {
            if !is_index(segments[i]) {
                return Err(CodecError::MalformedPath {
                    path: path.to_string(),
                    reason: format!(
                        "expected a numeric index after '{}', found '{}'",
                        segments[i - 1],
                        segments[i]
                    ),
                });
            }
            let (digits, _) = split_marker(segments[i]);
            let index: usize =
                digits
                    .parse()
                    .map_err(|_| CodecError::MalformedPath {
                        path: path.to_string(),
                        reason: format!("index '{digits}' is out of range"),
                    })?;
            let mut list = List::new();
            for _ in 0..index {
                list.push(Value::Absent);
            }
            list.push(acc);
            acc = Value::List(list);
        } else {
            let (name, _) = split_marker(segments[i]);
            let mut map = Map::new();
            map.insert(name, acc);
            acc = Value::Map(map);
        }
    }

    Ok(acc)
}

/// Drops the absent positional holes the merge left behind in lists.
///
/// Map entries keep absent values untouched; holes only ever arise inside
/// lists built by [`expand_single`].
fn strip_holes(value: Value) -> Value {
    match value {
        Value::List(list) => Value::List(
            list.into_iter()
                .filter(|element| !element.is_absent())
                .map(strip_holes)
                .collect(),
        ),
        Value::Map(map) => Value::Map(
            map.into_iter()
                .map(|(key, child)| (key, strip_holes(child)))
                .collect(),
        ),
        leaf => leaf,
    }
}
