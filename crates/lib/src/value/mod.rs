//! The tagged value model for nested structures.
//!
//! This module provides the [`Value`] enum representing every shape the
//! codec operates on. Values are either leaves (primitives and the
//! [`Value::Absent`] marker) or branches (nested [`Map`]s and [`List`]s).
//! Classification is by variant tag, never by runtime probing.
//!
//! # Value Types
//!
//! ## Leaf Values (Terminal Nodes)
//! - [`Value::Null`] - An explicit null leaf
//! - [`Value::Bool`] - Boolean values
//! - [`Value::Int`] - 64-bit signed integers
//! - [`Value::Float`] - 64-bit floats
//! - [`Value::Text`] - UTF-8 text strings
//!
//! ## Branch Values (Container Nodes)
//! - [`Value::Map`] - String-keyed, insertion-ordered mappings
//! - [`Value::List`] - Ordered sequences
//!
//! ## Absence
//! - [`Value::Absent`] - A "no value" leaf, distinct from `Null`. This is
//!   what [`remove_undefs`](crate::ops::remove_undefs) strips; the
//!   round-trip invariant of the codec is stated for structures without
//!   `Absent` leaves.

use std::fmt;

pub mod json;
pub mod list;
pub mod map;

pub use list::List;
pub use map::Map;

/// A nested structure: a leaf value, a sequence, or a string-keyed mapping,
/// to arbitrary depth.
///
/// # Direct Comparisons
///
/// `Value` implements `PartialEq` with primitive types for ergonomic
/// comparisons:
///
/// ```
/// # use flatpath::Value;
/// let text = Value::Text("hello".to_string());
/// let number = Value::Int(42);
/// let flag = Value::Bool(true);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(flag == true);
///
/// // Reverse comparisons also work
/// assert!("hello" == text);
///
/// // Type mismatches return false
/// assert!(!(text == 42));
/// ```
///
/// # Merge Behavior
///
/// [`Value::merge`] is the deep-merge reducer used throughout the codec:
///
/// - **Leaf values**: the right-hand value wins
/// - **Map + Map**: key-wise recursive merge
/// - **List + List**: element-wise merge by index, with [`Value::Absent`]
///   acting as a positional hole that always yields to a present value
/// - **Mismatched kinds**: the right-hand value wins
///
/// ```
/// # use flatpath::Value;
/// let mut val1 = Value::Int(42);
/// let val2 = Value::Int(100);
/// val1.merge(&val2);
/// assert_eq!(val1, Value::Int(100));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    // Leaf values (terminal nodes)
    /// Null/empty value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Float value
    Float(f64),
    /// Text string value
    Text(String),

    // Branch values (can contain other nodes)
    /// Ordered sequence of values
    List(List),
    /// String-keyed mapping of values
    Map(Map),

    /// A "no value" leaf.
    ///
    /// Serializes as `null`; never produced by deserialization (a JSON
    /// `null` deserializes to [`Value::Null`]).
    Absent,
}

impl Value {
    /// Returns true if this is a leaf value (terminal node).
    pub fn is_leaf(&self) -> bool {
        !self.is_branch()
    }

    /// Returns true if this is a branch value (can contain other nodes).
    pub fn is_branch(&self) -> bool {
        matches!(self, Value::Map(_) | Value::List(_))
    }

    /// Returns true if this is the absent marker.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns true if this value is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns the kind name as a string.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Absent => "absent",
        }
    }

    /// Attempts to convert to a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Attempts to convert to a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a list (returns immutable reference).
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable list reference.
    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a map (returns immutable reference).
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable map reference.
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Merges another value into this one.
    ///
    /// The deep-merge reducer over the tagged variant: map-merge is key-wise
    /// recursive with right-hand precedence on leaf collision, list-merge is
    /// element-wise by index with [`Value::Absent`] holes yielding to
    /// present values, and mismatched kinds take the right-hand value.
    ///
    /// Associative, and commutative on disjoint map keys and list indices;
    /// the expansion side of the codec relies on both.
    pub fn merge(&mut self, other: &Value) {
        match (self, other) {
            (Value::Map(self_map), Value::Map(other_map)) => {
                self_map.merge(other_map);
            }
            (Value::List(self_list), Value::List(other_list)) => {
                self_list.merge(other_list);
            }
            (slot, _) => {
                // Leaf collision or kind mismatch: right-hand value wins
                *slot = other.clone();
            }
        }
    }

    /// Converts to a JSON string representation for human-readable output.
    ///
    /// [`Value::Absent`] appears as `null`; use serde serialization of a
    /// structure that has been through
    /// [`remove_undefs`](crate::ops::remove_undefs) when that lossiness
    /// matters.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flatpath::Value;
    /// let value = Value::Text("hello".to_string());
    /// assert_eq!(value.to_json_string(), "\"hello\"");
    ///
    /// let absent = Value::Absent;
    /// assert_eq!(absent.to_json_string(), "null");
    /// ```
    pub fn to_json_string(&self) -> String {
        serde_json::Value::from(self).to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::List(list) => write!(f, "{list}"),
            Value::Map(map) => write!(f, "{map}"),
            Value::Absent => write!(f, "<absent>"),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::List(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(List::from(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Absent,
        }
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Value::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        match self {
            Value::Int(n) => *n == *other as i64,
            _ => false,
        }
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        match self {
            Value::Float(x) => x == other,
            _ => false,
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Value::Bool(b) => b == other,
            _ => false,
        }
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for f64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
