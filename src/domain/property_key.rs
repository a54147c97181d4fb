// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted property key newtype.
//!
//! A `PropertyKey` is a path from the tree root, written as segments joined by
//! `.` (for example `section1.bool.true`). The empty key names the root.

use crate::domain::errors::{PropertiesError, Result};
use std::fmt;

/// Separator between key segments.
pub const SEGMENT_SEPARATOR: char = '.';

/// A type-safe wrapper for dotted property keys.
///
/// # Examples
///
/// ```
/// use keyprops::domain::PropertyKey;
///
/// let key = PropertyKey::from("section1.bool.true");
/// assert_eq!(key.segments().collect::<Vec<_>>(), vec!["section1", "bool", "true"]);
/// assert_eq!(key.parent().unwrap().as_str(), "section1.bool");
/// assert_eq!(key.last_segment(), "true");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyKey(String);

impl PropertyKey {
    /// Creates a new `PropertyKey` from a `String`.
    pub fn new(key: String) -> Self {
        PropertyKey(key)
    }

    /// The root key (empty string).
    pub fn root() -> Self {
        PropertyKey(String::new())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `PropertyKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` for the root key.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the dot-separated segments. The root key has none.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        let key = if self.is_root() { None } else { Some(self.0.as_str()) };
        key.into_iter().flat_map(|k| k.split(SEGMENT_SEPARATOR))
    }

    /// Returns the key of the enclosing node, or `None` for the root.
    ///
    /// A single-segment key has the root as its parent.
    pub fn parent(&self) -> Option<PropertyKey> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind(SEGMENT_SEPARATOR) {
            Some(idx) => Some(PropertyKey(self.0[..idx].to_string())),
            None => Some(PropertyKey::root()),
        }
    }

    /// Returns the last segment of the key (empty for the root).
    pub fn last_segment(&self) -> &str {
        match self.0.rfind(SEGMENT_SEPARATOR) {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// Returns the key of the child named `segment`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyprops::domain::PropertyKey;
    ///
    /// assert_eq!(PropertyKey::root().child("a").as_str(), "a");
    /// assert_eq!(PropertyKey::from("a").child("b").as_str(), "a.b");
    /// ```
    pub fn child(&self, segment: &str) -> PropertyKey {
        if self.is_root() {
            PropertyKey(segment.to_string())
        } else {
            PropertyKey(format!("{}{}{}", self.0, SEGMENT_SEPARATOR, segment))
        }
    }

    /// Checks that the key can be stored in a tree.
    ///
    /// The key must be non-empty and every segment must be non-empty, so
    /// leading, trailing and doubled dots are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.is_root() {
            return Err(self.invalid("key is empty"));
        }
        if self.0.split(SEGMENT_SEPARATOR).any(str::is_empty) {
            return Err(self.invalid("key contains an empty segment"));
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> PropertiesError {
        PropertiesError::InvalidKey {
            key: self.0.clone(),
            reason: reason.to_string(),
        }
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey(s)
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey(s.to_string())
    }
}

impl From<PropertyKey> for String {
    fn from(key: PropertyKey) -> Self {
        key.0
    }
}

impl AsRef<str> for PropertyKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
