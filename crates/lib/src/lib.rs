//!
//! Flatpath: a bidirectional codec between arbitrarily nested structures and
//! single-level mappings keyed by dot-delimited path strings.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: The tagged structure model — leaves,
//!   ordered [`List`]s, and insertion-ordered [`Map`]s, nested to arbitrary
//!   depth.
//! * **Paths (`path`)**: Dot-delimited addresses into a structure
//!   (`a.b.d[].1`). Segments leading into a list carry the `[]` marker; the
//!   exact string form is the crate's one interop contract.
//! * **The codec (`codec`)**: [`flatten`](codec::flatten) encodes a
//!   structure into a [`FlatMap`], storing each leaf at its path and each
//!   list both verbatim and as flattened elements;
//!   [`expand`](codec::expand) inverts it. For any acyclic structure
//!   without [`Value::Absent`] leaves, empty nested maps, or map keys
//!   that collide with the path encoding (see `codec`) the two
//!   round-trip losslessly.
//! * **Operations (`ops`)**: Thin pure compositions over the codec —
//!   [`select`]/[`deselect`] projection by exact path sets,
//!   [`clone_deep`], [`remove_undefs`], [`many`], and the [`keys`]/
//!   [`values`] extraction pair.
//!
//! ## Usage
//!
//! ```
//! use flatpath::{codec::flatten, select, Value};
//!
//! let subject = Value::from_json_str(r#"{"a": {"b": {"c": 1, "d": [2, 3]}}}"#)?;
//!
//! let flat = flatten(&subject).into_map().unwrap();
//! assert_eq!(flat.get("a.b.d[].1"), Some(&Value::Int(3)));
//!
//! let picked = select(&subject, &["a.b.c"])?;
//! assert_eq!(picked.to_json_string(), r#"{"a":{"b":{"c":1}}}"#);
//! # Ok::<(), flatpath::Error>(())
//! ```

pub mod codec;
pub mod flat;
pub mod ops;
pub mod path;
pub mod value;

pub use codec::{CodecError, Flattened, expand, flatten};
pub use flat::FlatMap;
pub use ops::{clone_deep, deselect, keys, many, remove_undefs, select, values};
pub use path::{Path, PathBuf, PathError};
pub use value::{List, Map, Value};

/// Result type used throughout the flatpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the flatpath library.
///
/// Normal misuse of the operations (an unknown select path, a missing key)
/// resolves to omission, not failure; errors only surface for flat mappings
/// whose path strings are inconsistent with the encoding, for invalid path
/// components, and for JSON parsing.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Structured path validation errors from the path module
    #[error(transparent)]
    Path(path::PathError),

    /// Structured codec errors from the codec module
    #[error(transparent)]
    Codec(codec::CodecError),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Path(_) => "path",
            Error::Codec(_) => "codec",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is a malformed-path codec error.
    pub fn is_malformed_path(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_malformed_path(),
            _ => false,
        }
    }
}
