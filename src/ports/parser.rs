// SPDX-License-Identifier: MIT OR Apache-2.0

//! Properties parser trait definition.
//!
//! This module defines the `TreeParser` trait, the interface for turning a
//! line-oriented text stream into a populated [`KeyTree`].

use crate::domain::{KeyTree, Result};
use std::io::BufRead;

/// A trait for parsing properties text into a [`KeyTree`].
///
/// Parsing is all-or-nothing: an implementation either returns the fully
/// populated tree or the first error it hit, never a partial tree.
///
/// # Examples
///
/// ```rust
/// use keyprops::domain::{KeyTree, Result};
/// use keyprops::ports::TreeParser;
/// use std::io::BufRead;
///
/// struct PairsParser;
///
/// impl TreeParser for PairsParser {
///     fn parse_reader(&self, reader: &mut dyn BufRead) -> Result<KeyTree> {
///         let mut tree = KeyTree::new();
///         for line in reader.lines() {
///             let line = line?;
///             if let Some((key, value)) = line.split_once(':') {
///                 tree.put(key.trim(), value.trim())?;
///             }
///         }
///         Ok(tree)
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["pairs"]
///     }
/// }
///
/// let tree = PairsParser.parse("a.b: 1\nc: 2").unwrap();
/// assert_eq!(tree.find("a.b").unwrap().value(), Some("1"));
/// ```
pub trait TreeParser {
    /// Parses everything readable from `reader` into a new tree.
    ///
    /// # Returns
    ///
    /// * `Ok(KeyTree)` - The fully populated tree
    /// * `Err(PropertiesError)` - The first read or parse failure
    fn parse_reader(&self, reader: &mut dyn BufRead) -> Result<KeyTree>;

    /// Parses in-memory content into a new tree.
    fn parse(&self, content: &str) -> Result<KeyTree> {
        let mut bytes = content.as_bytes();
        self.parse_reader(&mut bytes)
    }

    /// Returns the file extensions (without the leading dot) this parser handles.
    fn supported_extensions(&self) -> &[&str];
}
