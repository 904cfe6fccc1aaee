//! String-keyed mappings for nested structures.
//!
//! [`Map`] is the mapping half of the [`Value`](super::Value) data model.
//! Entries preserve insertion order, which is load-bearing for the codec:
//! expand builds lists in key-iteration order and the shallowing filter
//! preserves input order, so an unordered backing map would not round-trip.

use std::fmt;

use indexmap::IndexMap;

use super::{List, Value};

/// An insertion-ordered mapping from string keys to [`Value`]s.
///
/// # Examples
///
/// ## Basic Operations
/// ```
/// # use flatpath::Map;
/// let mut map = Map::new();
/// map.insert("name", "Alice");
/// map.insert("age", 30);
///
/// assert_eq!(map.get("name").and_then(|v| v.as_text()), Some("Alice"));
/// assert_eq!(map.get("age").and_then(|v| v.as_int()), Some(30));
/// ```
///
/// ## Builder Style
/// ```
/// # use flatpath::{List, Map};
/// let map = Map::new()
///     .with_text("name", "Alice")
///     .with_int("age", 30)
///     .with_list("tags", List::from(vec!["a", "b"]));
/// assert_eq!(map.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Map {
    entries: IndexMap<String, Value>,
}

impl Map {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Inserts a key-value pair, returning the old value if present.
    ///
    /// Re-inserting an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Gets a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Gets a mutable reference to a value by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Removes a key, returning its value if present.
    ///
    /// Uses shift-removal so the relative order of remaining entries is kept.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Returns true if the map contains the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over all key-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over all key-value pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over all keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Returns an iterator over all values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Merges another map into this one.
    ///
    /// Key-wise recursive merge with right-hand precedence: keys only in
    /// `other` are inserted, keys present on both sides merge their values
    /// via [`Value::merge`] (maps recurse, lists merge element-wise, leaves
    /// take the right-hand value).
    ///
    /// ```
    /// # use flatpath::Map;
    /// let mut a = Map::new().with_int("x", 1).with_int("y", 2);
    /// let b = Map::new().with_int("y", 20).with_int("z", 30);
    /// a.merge(&b);
    ///
    /// assert_eq!(a.get("x").and_then(|v| v.as_int()), Some(1));
    /// assert_eq!(a.get("y").and_then(|v| v.as_int()), Some(20));
    /// assert_eq!(a.get("z").and_then(|v| v.as_int()), Some(30));
    /// ```
    pub fn merge(&mut self, other: &Map) {
        for (key, other_value) in &other.entries {
            match self.entries.get_mut(key) {
                Some(self_value) => {
                    self_value.merge(other_value);
                }
                None => {
                    self.entries.insert(key.clone(), other_value.clone());
                }
            }
        }
    }
}

// Builder pattern methods
impl Map {
    /// Builder method to set a value and return self.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder method to set a boolean value.
    pub fn with_bool(self, key: impl Into<String>, value: bool) -> Self {
        self.with(key, Value::Bool(value))
    }

    /// Builder method to set an integer value.
    pub fn with_int(self, key: impl Into<String>, value: i64) -> Self {
        self.with(key, Value::Int(value))
    }

    /// Builder method to set a float value.
    pub fn with_float(self, key: impl Into<String>, value: f64) -> Self {
        self.with(key, Value::Float(value))
    }

    /// Builder method to set a text value.
    pub fn with_text(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(key, Value::Text(value.into()))
    }

    /// Builder method to set a list value.
    pub fn with_list(self, key: impl Into<String>, value: impl Into<List>) -> Self {
        self.with(key, Value::List(value.into()))
    }

    /// Builder method to set a nested map.
    pub fn with_map(self, key: impl Into<String>, value: impl Into<Map>) -> Self {
        self.with(key, Value::Map(value.into()))
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}
