//! Error types for the flatten/expand codec.

use thiserror::Error;

/// Structured error types for codec operations.
///
/// The codec is total over mappings produced by flatten; these variants
/// only surface for hand-built flat mappings whose path strings are
/// inconsistent with the encoding.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A path string is inconsistent with the list-marker encoding.
    #[error("malformed path '{path}': {reason}")]
    MalformedPath { path: String, reason: String },
}

impl CodecError {
    /// Check if this error is a malformed-path error.
    pub fn is_malformed_path(&self) -> bool {
        matches!(self, CodecError::MalformedPath { .. })
    }

    /// Get the offending path if this is a path-related error.
    pub fn path(&self) -> Option<&str> {
        match self {
            CodecError::MalformedPath { path, .. } => Some(path),
        }
    }
}

// Conversion from CodecError to the main Error type
impl From<CodecError> for crate::Error {
    fn from(err: CodecError) -> Self {
        crate::Error::Codec(err)
    }
}
