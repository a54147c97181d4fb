// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalar property value with typed conversions.
//!
//! Values are kept as the raw text read from the input; conversion to
//! integers, floats and booleans happens on access.

use crate::domain::errors::{PropertiesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tokens accepted as `true` (compared case-insensitively).
pub const TRUE_VALUES: [&str; 3] = ["true", "yes", "1"];

/// Tokens accepted as `false` (compared case-insensitively).
pub const FALSE_VALUES: [&str; 3] = ["false", "no", "0"];

/// A type-safe wrapper for a property's scalar value.
///
/// Serializes as the bare string, so values can be handed to any serde
/// format unchanged.
///
/// # Examples
///
/// ```
/// use keyprops::domain::PropertyValue;
///
/// let value = PropertyValue::from("9345");
/// assert_eq!(value.as_str(), "9345");
/// assert_eq!(value.as_i64("bind_port").unwrap(), 9345);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyValue(String);

impl PropertyValue {
    /// Creates a new `PropertyValue` from a `String`.
    pub fn new(value: String) -> Self {
        PropertyValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into a `String`.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Converts the value to a boolean.
    ///
    /// Only `true`, `yes`, `1` and `false`, `no`, `0` are accepted, in any
    /// letter case. Anything else is an [`PropertiesError::InvalidBoolean`].
    ///
    /// # Examples
    ///
    /// ```
    /// use keyprops::domain::PropertyValue;
    ///
    /// assert_eq!(PropertyValue::from("YES").as_bool("k").unwrap(), true);
    /// assert_eq!(PropertyValue::from("0").as_bool("k").unwrap(), false);
    /// assert!(PropertyValue::from("on").as_bool("k").is_err());
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        let lowered = self.0.to_lowercase();
        if TRUE_VALUES.contains(&lowered.as_str()) {
            Ok(true)
        } else if FALSE_VALUES.contains(&lowered.as_str()) {
            Ok(false)
        } else {
            Err(PropertiesError::InvalidBoolean {
                key: key.to_string(),
                value: self.0.clone(),
            })
        }
    }

    /// Converts the value to an `i64`.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.0
            .parse::<i64>()
            .map_err(|e| PropertiesError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to an `f64`.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        self.0
            .parse::<f64>()
            .map_err(|e| PropertiesError::from_parse_float_error(key.to_string(), e))
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyprops::domain::PropertyValue;
    /// use std::net::IpAddr;
    ///
    /// let value = PropertyValue::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("listen").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| PropertiesError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue(s.to_string())
    }
}

impl From<PropertyValue> for String {
    fn from(value: PropertyValue) -> Self {
        value.0
    }
}

impl AsRef<str> for PropertyValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
