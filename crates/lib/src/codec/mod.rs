//! The flatten/expand path codec.
//!
//! This module is the spine of the crate: [`flatten`] encodes a nested
//! structure into a single-level [`FlatMap`] keyed by dot-delimited paths,
//! and [`expand`] inverts it. The two are mutual inverses for any acyclic
//! structure without [`Value::Absent`] leaves or empty maps nested inside
//! maps (an empty map leaves no entry behind, so expansion cannot restore
//! it):
//!
//! ```
//! use flatpath::{codec::{expand, flatten}, Value};
//!
//! let subject = Value::from_json_str(r#"{"a": {"b": [1, 2]}}"#)?;
//! let flat = flatten(&subject).into_map().unwrap();
//! assert_eq!(expand(&flat)?, subject);
//! # Ok::<(), flatpath::Error>(())
//! ```
//!
//! The path encoding itself is the one interop contract: segments join with
//! dots, list elements use decimal indices, and each segment leading into a
//! list carries the `[]` marker (`a.b.d[].1`). Object keys that are
//! themselves numeric strings are indistinguishable from list indices in
//! this encoding (see [`expand`] for the documented limitation), and keys
//! containing a dot or ending in the marker conflate with path structure
//! the same way (see [`flatten`]).

mod errors;
mod expand;
mod flatten;

pub use errors::CodecError;
pub use expand::expand;
pub use flatten::flatten;

pub(crate) use flatten::flatten_single;

use crate::{flat::FlatMap, value::Value};

/// The result of flattening a subject.
///
/// A map subject (or a primitive, which flattens to an empty mapping)
/// yields a single mapping; a top-level list yields one mapping per
/// element, kept separate rather than merged.
#[derive(Debug, Clone, PartialEq)]
pub enum Flattened {
    /// A single flat mapping.
    Map(FlatMap),
    /// One flat mapping per element of a top-level list.
    Seq(Vec<FlatMap>),
}

impl Flattened {
    /// Returns the single mapping, or `None` for a top-level list result.
    pub fn as_map(&self) -> Option<&FlatMap> {
        match self {
            Flattened::Map(flat) => Some(flat),
            Flattened::Seq(_) => None,
        }
    }

    /// Consumes self and returns the single mapping, or `None` for a
    /// top-level list result.
    pub fn into_map(self) -> Option<FlatMap> {
        match self {
            Flattened::Map(flat) => Some(flat),
            Flattened::Seq(_) => None,
        }
    }

    /// Returns the per-element mappings, or `None` for a single mapping.
    pub fn as_seq(&self) -> Option<&[FlatMap]> {
        match self {
            Flattened::Map(_) => None,
            Flattened::Seq(seq) => Some(seq),
        }
    }

    /// Collects every path across the result, deduplicated in
    /// first-occurrence order.
    ///
    /// On a flattened mapping the immediate keys *are* the full dot-paths,
    /// list containers included; this is the key set the projection
    /// operations subtract from.
    pub fn paths(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        let mut push_unique = |key: &String| {
            if !out.contains(key) {
                out.push(key.clone());
            }
        };
        match self {
            Flattened::Map(flat) => flat.keys().for_each(&mut push_unique),
            Flattened::Seq(seq) => seq
                .iter()
                .flat_map(|flat| flat.keys())
                .for_each(&mut push_unique),
        }
        out
    }

    /// Expands the result back into a nested structure.
    ///
    /// A single mapping expands via [`expand`]; a per-element sequence
    /// expands element-wise into a list.
    pub fn expand(&self) -> Result<Value, CodecError> {
        match self {
            Flattened::Map(flat) => expand(flat),
            Flattened::Seq(seq) => {
                let mut list = crate::value::List::new();
                for flat in seq {
                    list.push(expand(flat)?);
                }
                Ok(Value::List(list))
            }
        }
    }
}
