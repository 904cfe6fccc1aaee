//! The flat path-to-value mapping produced by flatten.
//!
//! A [`FlatMap`] is a single-level, insertion-ordered mapping from
//! dot-delimited path strings to [`Value`]s. For every list met during
//! flattening the mapping holds *both* the list's verbatim value at its own
//! path *and* recursively flattened entries for its elements; this
//! redundancy is deliberate, not an artifact. Callers that need only leaves
//! must filter by value kind, and [`FlatMap::shallow`] strips the
//! redundancy down to the mapping's roots before reconstruction.

use indexmap::IndexMap;

use crate::{path::LIST_MARKER, value::Value};

/// A single-level mapping from path strings to values.
///
/// Entry order is insertion order. Expand relies on it when rebuilding a
/// root-level list (values are pushed in key-iteration order); nested list
/// elements are placed by their numeric index segments regardless of entry
/// order.
///
/// # Examples
///
/// ```
/// # use flatpath::{FlatMap, Value};
/// let mut flat = FlatMap::new();
/// flat.insert("a.b", 1);
/// flat.insert("a.c", 2);
///
/// assert_eq!(flat.len(), 2);
/// assert_eq!(flat.get("a.b"), Some(&Value::Int(1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FlatMap {
    entries: IndexMap<String, Value>,
}

impl FlatMap {
    /// Creates a new empty flat mapping.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Inserts a path-value entry, returning the old value if present.
    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(path.into(), value.into())
    }

    /// Gets a value by exact path string.
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.entries.get(path)
    }

    /// Returns true if the mapping contains the exact path.
    pub fn contains_path(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over all path-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Returns an iterator over all paths in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Returns an iterator over all values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Deep-merges another flat mapping into this one.
    ///
    /// Entries only in `other` are appended; entries present on both sides
    /// merge their values via [`Value::merge`], so the deeper (right-hand)
    /// entry's leaves win and colliding lists merge element-wise.
    pub fn merge(&mut self, other: &FlatMap) {
        for (path, other_value) in &other.entries {
            match self.entries.get_mut(path) {
                Some(self_value) => {
                    self_value.merge(other_value);
                }
                None => {
                    self.entries.insert(path.clone(), other_value.clone());
                }
            }
        }
    }

    /// Reduces the mapping to its shallow roots.
    ///
    /// Keeps only entries whose path is not a strict prefix of another
    /// present path. The prefix test is marker-aware: `a.b.d` is shadowed
    /// by `a.b.d[].0` as well as by `a.b.d.e`, because flatten stores a
    /// list container's own path unmarked while its element paths carry the
    /// `[]` marker. Membership-only; values and order are untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flatpath::FlatMap;
    /// let mut flat = FlatMap::new();
    /// flat.insert("a", 0);
    /// flat.insert("a.b", 1);
    /// flat.insert("c", 2);
    ///
    /// let roots = flat.shallow();
    /// let keys: Vec<&String> = roots.keys().collect();
    /// assert_eq!(keys, ["a.b", "c"]);
    /// ```
    pub fn shallow(&self) -> FlatMap {
        let mut roots = FlatMap::new();
        for (path, value) in &self.entries {
            let shadowed = self
                .entries
                .keys()
                .any(|other| other.len() > path.len() && shadowed_by(path, other));
            if !shadowed {
                roots.insert(path.clone(), value.clone());
            }
        }
        roots
    }
}

/// Returns true if `other` extends `path` by at least one segment.
///
/// The continuation after `path` must be a dot or a list marker followed by
/// a dot; `a.b` is not shadowed by `a.bc`.
fn shadowed_by(path: &str, other: &str) -> bool {
    other.strip_prefix(path).is_some_and(|rest| {
        rest.starts_with('.')
            || rest
                .strip_prefix(LIST_MARKER)
                .is_some_and(|after| after.starts_with('.'))
    })
}

impl FromIterator<(String, Value)> for FlatMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FlatMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlatMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
