//! Ordered sequences for nested structures.
//!
//! [`List`] is the sequence half of the [`Value`](super::Value) data model:
//! a plain ordered collection addressed by decimal indices in path strings.
//! List order is preserved through the flatten/expand codec, and merging two
//! lists combines them element-wise by index (see [`List::merge`]).

use std::fmt;

use super::Value;

/// An ordered collection of [`Value`]s.
///
/// # Examples
///
/// ```
/// # use flatpath::{List, Value};
/// let mut list = List::new();
/// list.push(1);
/// list.push("two");
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(0), Some(&Value::Int(1)));
/// assert_eq!(list.get(1), Some(&Value::Text("two".to_string())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a value to the end of the list, returning its index.
    pub fn push(&mut self, value: impl Into<Value>) -> usize {
        self.items.push(value.into());
        self.items.len() - 1
    }

    /// Gets a value by index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Gets a mutable reference to a value by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the elements.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.items.iter_mut()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Merges another list into this one, element-wise by index.
    ///
    /// This is the list half of the deep-merge reducer. Elements at the
    /// same index merge recursively via [`Value::merge`]; elements past
    /// this list's length are appended as clones. [`Value::Absent`]
    /// elements act as positional holes: an absent incoming element never
    /// displaces a present one, and an absent element here is filled by a
    /// present incoming one. Holes are kept, not compacted, so positions
    /// stay aligned across successive merges.
    ///
    /// ```
    /// # use flatpath::{List, Value};
    /// let mut a = List::from(vec![Value::Int(7)]);
    /// let b = List::from(vec![Value::Absent, Value::Int(8)]);
    /// a.merge(&b);
    /// assert_eq!(a, List::from(vec![7, 8]));
    /// ```
    pub fn merge(&mut self, other: &List) {
        for (index, incoming) in other.items.iter().enumerate() {
            match self.items.get_mut(index) {
                Some(existing) => {
                    if incoming.is_absent() {
                        continue;
                    }
                    if existing.is_absent() {
                        *existing = incoming.clone();
                    } else {
                        existing.merge(incoming);
                    }
                }
                None => {
                    self.items.push(incoming.clone());
                }
            }
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for List {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl FromIterator<Value> for List {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
