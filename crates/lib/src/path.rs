//! Path types for addressing into nested structures.
//!
//! This module provides type-safe construction and validation of the
//! dot-delimited path strings used by the flatten/expand codec. The
//! Path/PathBuf types follow the same borrowed/owned pattern as
//! std::path::Path/PathBuf.
//!
//! # Core Types
//!
//! - [`Path`] - An unsized borrowed path type (always behind a reference)
//! - [`PathBuf`] - An owned path type that can be constructed and modified
//! - [`Component`] - A single validated path segment
//!
//! # Path encoding
//!
//! Each segment of a path is either a property name or a decimal list index.
//! A segment whose value is a list carries the two-character [`LIST_MARKER`]
//! suffix (`[]`) whenever it is not the final segment of the path: the marker
//! decorates the edge leading into a list, never the list's own elements.
//! `a.b.d[].1` addresses element 1 of the list stored under `a.b.d`.
//!
//! # Usage
//!
//! ```rust
//! use flatpath::path::PathBuf;
//! use std::str::FromStr;
//!
//! // Construct from string (automatically normalized)
//! let path = PathBuf::from_str("user.profile.name")?;
//!
//! // Build incrementally (infallible)
//! let path = PathBuf::new()
//!     .push("user")
//!     .push("profile")
//!     .push("name");
//! assert_eq!(path.as_str(), "user.profile.name");
//! # Ok::<(), std::convert::Infallible>(())
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use thiserror::Error;

/// Marker suffix for a segment whose value is a list.
///
/// Appears only on non-final segments; the final segment of a path is always
/// stored unmarked (the marker describes the edge into the list, not the
/// list itself).
pub const LIST_MARKER: &str = "[]";

/// Error type for path validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// Invalid component: components cannot contain dots or an interior
    /// list marker.
    #[error("Invalid component '{component}': {reason}")]
    InvalidComponent { component: String, reason: String },
}

// Conversion from PathError to the main Error type
impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}

/// Normalizes a path string by cleaning up dots and empty components.
///
/// - Empty string "" → empty string
/// - Leading dots ".user" → "user"
/// - Trailing dots "user." → "user"
/// - Consecutive dots "user..profile" → "user.profile"
/// - Pure dots "..." → empty string
///
/// # Examples
///
/// ```rust
/// # use flatpath::path::normalize_path;
/// assert_eq!(normalize_path(""), "");
/// assert_eq!(normalize_path(".user"), "user");
/// assert_eq!(normalize_path("user..profile"), "user.profile");
/// assert_eq!(normalize_path("tags[].0"), "tags[].0");
/// ```
pub fn normalize_path(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split('.')
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Splits a segment into its name and list-marker flag.
///
/// # Examples
///
/// ```rust
/// # use flatpath::path::split_marker;
/// assert_eq!(split_marker("tags[]"), ("tags", true));
/// assert_eq!(split_marker("tags"), ("tags", false));
/// assert_eq!(split_marker("0[]"), ("0", true));
/// ```
pub fn split_marker(segment: &str) -> (&str, bool) {
    match segment.strip_suffix(LIST_MARKER) {
        Some(name) => (name, true),
        None => (segment, false),
    }
}

/// Returns true if the segment (after stripping any list marker) is a
/// decimal list index.
///
/// # Examples
///
/// ```rust
/// # use flatpath::path::is_index;
/// assert!(is_index("0"));
/// assert!(is_index("42[]"));
/// assert!(!is_index("name"));
/// assert!(!is_index(""));
/// ```
pub fn is_index(segment: &str) -> bool {
    let (name, _) = split_marker(segment);
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

/// A validated component of a path.
///
/// Components are individual parts of a path, separated by dots. They cannot
/// contain dots themselves, and a list marker may only appear as a suffix.
/// Empty components are allowed but will be filtered during normalization.
///
/// # Examples
///
/// ```rust
/// # use flatpath::path::Component;
/// let user = Component::new("user").unwrap();
/// let tags = Component::new("tags[]").unwrap();
/// assert!(tags.is_list());
/// assert!(!user.is_list());
///
/// assert!(Component::new("user.name").is_err()); // Dots not allowed
/// assert!(Component::new("ta[]gs").is_err());    // Interior marker not allowed
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    inner: String,
}

impl Component {
    /// Creates a new component from a string.
    ///
    /// # Errors
    /// Returns an error if the component contains a dot or a list marker
    /// anywhere other than as a suffix.
    pub fn new(s: impl Into<String>) -> Result<Self, PathError> {
        let s = s.into();

        if s.contains('.') {
            return Err(PathError::InvalidComponent {
                component: s.clone(),
                reason: "components cannot contain dots".to_string(),
            });
        }

        let (name, _) = split_marker(&s);
        if name.contains(LIST_MARKER) {
            return Err(PathError::InvalidComponent {
                component: s.clone(),
                reason: "list marker may only appear as a suffix".to_string(),
            });
        }

        Ok(Component { inner: s })
    }

    /// Returns the component as a string slice, marker included.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the component's name with any list marker stripped.
    pub fn name(&self) -> &str {
        split_marker(&self.inner).0
    }

    /// Returns true if this component carries the list marker.
    pub fn is_list(&self) -> bool {
        split_marker(&self.inner).1
    }
}

impl AsRef<str> for Component {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for Component {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::new(s)
    }
}

impl TryFrom<String> for Component {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Component::new(s)
    }
}

impl TryFrom<&str> for Component {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Component::new(s)
    }
}

/// An owned, validated path addressing into a nested structure.
///
/// # Examples
///
/// ```rust
/// # use flatpath::path::PathBuf;
/// # use std::str::FromStr;
/// // Create from string (automatically normalized)
/// let path = PathBuf::from_str("user.profile.name")?;
///
/// // Build incrementally (infallible)
/// let path = PathBuf::new()
///     .push("user")
///     .push("profile")
///     .push("name");
///
/// let components: Vec<&str> = path.components().collect();
/// assert_eq!(components, vec!["user", "profile", "name"]);
/// # Ok::<(), std::convert::Infallible>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathBuf {
    inner: String,
}

/// A borrowed, validated path addressing into a nested structure.
///
/// `Path` is the borrowed counterpart to `PathBuf`, similar to how `&str`
/// relates to `String`. This type is unsized and must always be used behind
/// a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Path {
    inner: str,
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Creates a path from a single component.
    pub fn from_component(component: Component) -> Self {
        Self {
            inner: component.inner,
        }
    }

    /// Adds a path to the end of this path.
    ///
    /// Accepts both strings and Path types, normalizing the input. Infallible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use flatpath::path::PathBuf;
    /// let path = PathBuf::new().push("user").push("profile");
    /// assert_eq!(path.as_str(), "user.profile");
    ///
    /// // Marked segments pass through unchanged
    /// let path = PathBuf::new().push("tags[]").push("0");
    /// assert_eq!(path.as_str(), "tags[].0");
    /// ```
    pub fn push(mut self, path: impl AsRef<str>) -> Self {
        let normalized = normalize_path(path.as_ref());
        if normalized.is_empty() {
            return self;
        }

        if self.inner.is_empty() {
            self.inner = normalized;
        } else {
            self.inner.push('.');
            self.inner.push_str(&normalized);
        }
        self
    }

    /// Adds a validated component to the end of this path.
    pub fn push_component(mut self, component: Component) -> Self {
        if self.inner.is_empty() {
            self.inner = component.inner;
        } else {
            self.inner.push('.');
            self.inner.push_str(&component.inner);
        }
        self
    }

    /// Joins this path with another path.
    pub fn join(mut self, other: impl AsRef<Path>) -> Self {
        let other_path = other.as_ref();
        if self.inner.is_empty() {
            self.inner = other_path.inner.to_string();
        } else if !other_path.inner.is_empty() {
            self.inner.push('.');
            self.inner.push_str(&other_path.inner);
        }
        self
    }

    /// Returns an iterator over the path components as string slices.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.inner.split('.').filter(|s| !s.is_empty())
    }

    /// Returns the number of components in the path.
    pub fn len(&self) -> usize {
        if self.inner.is_empty() {
            0
        } else {
            self.inner.split('.').count()
        }
    }

    /// Returns `true` if the path has no components.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the parent path, or `None` if this is the root.
    pub fn parent(&self) -> Option<PathBuf> {
        self.inner.rfind('.').map(|last_dot| PathBuf {
            inner: self.inner[..last_dot].to_string(),
        })
    }

    /// Returns the last component of the path, or `None` if empty.
    pub fn file_name(&self) -> Option<&str> {
        if self.inner.is_empty() {
            None
        } else if let Some(last_dot) = self.inner.rfind('.') {
            Some(&self.inner[last_dot + 1..])
        } else {
            Some(&self.inner)
        }
    }

    /// Creates a PathBuf from a normalized string.
    fn from_normalized(normalized: String) -> Self {
        PathBuf { inner: normalized }
    }

    /// Creates a PathBuf by normalizing the input string.
    ///
    /// This method always succeeds by applying path normalization rules.
    pub fn normalize(path: &str) -> Self {
        Self::from_normalized(normalize_path(path))
    }
}

impl Path {
    /// Creates a Path from a string without validation.
    ///
    /// # Safety
    /// The caller must ensure that the string is a valid path:
    /// - No leading or trailing dots
    /// - No empty components (consecutive dots)
    /// - Components may not contain dots
    ///
    /// This is primarily intended for use with compile-time validated string
    /// literals via the [`path!`](crate::path!) macro.
    pub unsafe fn from_str_unchecked(s: &str) -> &Path {
        // SAFETY: Path has the same memory layout as str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the path components as string slices.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.inner.split('.').filter(|s| !s.is_empty())
    }

    /// Returns the number of components in the path.
    pub fn len(&self) -> usize {
        if self.inner.is_empty() {
            0
        } else {
            self.inner.split('.').count()
        }
    }

    /// Returns `true` if the path has no components.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the last component of the path, or `None` if empty.
    pub fn file_name(&self) -> Option<&str> {
        if self.inner.is_empty() {
            None
        } else {
            self.inner.split('.').next_back()
        }
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        // Safe because Path has the same layout as str
        unsafe { Path::from_str_unchecked(self.inner.as_str()) }
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.deref()
    }
}

impl AsRef<PathBuf> for PathBuf {
    fn as_ref(&self) -> &PathBuf {
        self
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.deref()
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

impl From<&PathBuf> for PathBuf {
    fn from(path: &PathBuf) -> Self {
        path.clone()
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", self.inner)
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

/// Constructs a path with compile-time optimization for literals.
///
/// - Single string literal returns `&'static Path` (zero allocation)
/// - Multiple arguments or runtime values return `PathBuf`
///
/// The literal form performs no runtime normalization; the literal must
/// already be a normalized path, which is enforced at compile time. A
/// literal with a leading, trailing, or doubled dot fails to build:
///
/// ```compile_fail
/// let path = flatpath::path!(".user..name");
/// ```
///
/// # Examples
///
/// ```rust
/// # use flatpath::path;
/// // Zero-cost literal (returns &'static Path)
/// let path = path!("user.profile.name");
///
/// // Multiple components (returns PathBuf)
/// let path = path!("user", "profile", "name");
///
/// // Mixed runtime/literal (returns PathBuf)
/// let base = "user";
/// let path = path!(base, "profile", "name");
///
/// // Empty path
/// let empty = path!();
/// ```
#[macro_export]
macro_rules! path {
    // Empty path - returns PathBuf
    () => {
        $crate::path::PathBuf::new()
    };

    // Single string literal - returns &'static Path (zero allocation)
    ($single:literal) => {{
        const VALIDATED: &str = $crate::path::validate_literal($single);
        // Safe because the literal was validated at compile time
        unsafe { $crate::path::Path::from_str_unchecked(VALIDATED) }
    }};

    // Multiple arguments - returns PathBuf
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let mut path = $crate::path::PathBuf::new();

        fn add_component(path: &mut $crate::path::PathBuf, component: impl AsRef<str>) {
            let component_str = component.as_ref().trim();
            if !component_str.is_empty() {
                *path = std::mem::take(path).push(component_str);
            }
        }

        let first_str = $first.to_string();
        add_component(&mut path, first_str);

        $(
            let rest_str = $rest.to_string();
            add_component(&mut path, rest_str);
        )*

        path
    }};
}

/// Validates that a path literal is already normalized.
///
/// Used by the [`path!`](crate::path!) macro's literal form, which skips
/// runtime normalization: the literal must carry no leading, trailing, or
/// consecutive dots. In const context a violation is a compile error.
pub const fn validate_literal(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.is_empty() {
        return path;
    }

    assert!(bytes[0] != b'.', "path literal must not begin with a dot");
    assert!(
        bytes[bytes.len() - 1] != b'.',
        "path literal must not end with a dot"
    );
    let mut i = 1;
    while i < bytes.len() {
        assert!(
            !(bytes[i - 1] == b'.' && bytes[i] == b'.'),
            "path literal must not contain empty segments"
        );
        i += 1;
    }

    path
}
