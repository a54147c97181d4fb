// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only properties facade.
//!
//! `Properties` wraps a fully parsed [`KeyTree`] and exposes typed getters
//! and structural queries. It is built once and never mutated afterwards, so
//! it can be shared across threads without locking.

use crate::adapters::{file, IniParser};
use crate::domain::{KeyTree, PropertiesError, PropertyKey, PropertyValue, Result};
use crate::ports::TreeParser;
use std::collections::BTreeSet;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

/// Parsed properties addressed by dotted keys.
///
/// # Examples
///
/// ```rust
/// use keyprops::service::Properties;
///
/// # fn main() -> keyprops::domain::Result<()> {
/// let props: Properties = "bind_port = 9345\n[section1]\nfloat = 4.5".parse()?;
///
/// assert_eq!(props.get_int("bind_port")?, 9345);
/// assert_eq!(props.get_float("section1.float")?, 4.5);
/// assert!(props.key_exists("section1"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Properties {
    tree: KeyTree,
}

impl Properties {
    /// Parses an INI-style stream.
    ///
    /// The whole stream is consumed. On the first invalid line the load fails
    /// and no properties are returned.
    pub fn load<R: BufRead>(mut reader: R) -> Result<Self> {
        Self::load_with(&IniParser::new(), &mut reader)
    }

    /// Parses a stream with a custom parser.
    pub fn load_with(parser: &dyn TreeParser, reader: &mut dyn BufRead) -> Result<Self> {
        Ok(Self::from_tree(parser.parse_reader(reader)?))
    }

    /// Loads and parses the INI-style file at `path`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use keyprops::service::Properties;
    ///
    /// let props = Properties::load_file("/etc/myapp/config.ini").unwrap();
    /// ```
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_tree(file::parse_file(path, &IniParser::new())?))
    }

    /// Loads `config.ini` from the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::load_file(file::default_location(app_name, qualifier)?)
    }

    /// Loads a custom file name from the OS-appropriate configuration directory.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        Self::load_file(file::location_for(app_name, qualifier, filename)?)
    }

    /// Wraps an already populated tree.
    pub fn from_tree(tree: KeyTree) -> Self {
        Self { tree }
    }

    /// The underlying tree.
    pub fn tree(&self) -> &KeyTree {
        &self.tree
    }

    /// Returns the raw value stored at `key`.
    ///
    /// # Errors
    ///
    /// * [`PropertiesError::NodeNotFound`] - no such path
    /// * [`PropertiesError::NoValue`] - the path exists but holds no value
    pub fn get_str(&self, key: &str) -> Result<&str> {
        self.tree
            .find(key)?
            .value()
            .ok_or_else(|| PropertiesError::NoValue {
                key: key.to_string(),
            })
    }

    /// Returns an owned copy of the value stored at `key`.
    pub fn get_string(&self, key: &str) -> Result<String> {
        self.get_str(key).map(str::to_string)
    }

    /// Returns the value stored at `key` wrapped for further conversion.
    pub fn get_value(&self, key: &str) -> Result<PropertyValue> {
        self.get_str(key).map(PropertyValue::from)
    }

    /// Returns the value at `key` as an integer.
    pub fn get_int(&self, key: &str) -> Result<i64> {
        self.get_value(key)?.as_i64(key)
    }

    /// Returns the value at `key` as a float.
    pub fn get_float(&self, key: &str) -> Result<f64> {
        self.get_value(key)?.as_f64(key)
    }

    /// Returns the value at `key` as a boolean.
    ///
    /// Accepts `true`/`yes`/`1` and `false`/`no`/`0` in any letter case.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get_value(key)?.as_bool(key)
    }

    /// Parses the value at `key` into any `FromStr` type.
    pub fn get_parsed<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.get_value(key)?.parse(key)
    }

    /// Returns the value at `key`, or `default` if it is missing or valueless.
    pub fn get_or_default(&self, key: &str, default: &str) -> PropertyValue {
        self.get_value(key)
            .unwrap_or_else(|_| PropertyValue::from(default))
    }

    /// Returns `true` if `key` names a node, whether or not it holds a value.
    pub fn key_exists(&self, key: &str) -> bool {
        self.tree.contains(key)
    }

    /// Returns the immediate child segment names of `key`.
    ///
    /// The empty key lists the top-level segments.
    ///
    /// # Errors
    ///
    /// Returns [`PropertiesError::NodeNotFound`] if `key` does not resolve.
    pub fn subkeys(&self, key: &str) -> Result<BTreeSet<String>> {
        let node = self.tree.find(key)?;
        Ok(node.child_segments().map(str::to_string).collect())
    }

    /// Every key holding a value, sorted.
    pub fn keys(&self) -> Vec<PropertyKey> {
        self.tree.keys()
    }
}

impl FromStr for Properties {
    type Err = PropertiesError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::from_tree(IniParser::new().parse(s)?))
    }
}
