//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! These conversions are the interop seam for callers holding JSON data:
//! numbers become [`Value::Int`] when they fit in `i64` and [`Value::Float`]
//! otherwise, JSON objects preserve their key order, and [`Value::Absent`]
//! maps to JSON `null` on the way out (absence is not representable in JSON).

use super::{List, Map, Value};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Value::from(value.clone())
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null | Value::Absent => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Float(x) => serde_json::Value::from(*x),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::List(list) => {
                serde_json::Value::Array(list.iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

impl Value {
    /// Parses a JSON string into a [`Value`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use flatpath::Value;
    /// let value = Value::from_json_str(r#"{"a": 1, "b": [true, null]}"#)?;
    /// assert!(value.is_map());
    /// # Ok::<(), flatpath::Error>(())
    /// ```
    pub fn from_json_str(input: &str) -> crate::Result<Value> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(Value::from(json))
    }
}
