// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the properties crate.
//!
//! All errors use `thiserror`. Lookups, parsing and type conversion share the
//! single [`PropertiesError`] enum so callers can match on the failure kind.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// The main error type for properties operations.
///
/// `NodeNotFound` is a unit variant: callers that only need a presence test
/// compare on the variant (see [`PropertiesError::is_not_found`]) rather than
/// on any payload.
///
/// # Examples
///
/// ```
/// use keyprops::domain::errors::PropertiesError;
///
/// fn lookup() -> Result<String, PropertiesError> {
///     Err(PropertiesError::NodeNotFound)
/// }
///
/// assert!(lookup().unwrap_err().is_not_found());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PropertiesError {
    /// The requested key does not resolve to any node of the tree.
    #[error("node not found")]
    NodeNotFound,

    /// The key resolves to a structural node that holds no scalar value.
    #[error("node '{key}' has no value")]
    NoValue {
        /// The key that was looked up
        key: String,
    },

    /// A line of input matched neither a section header nor an assignment.
    #[error("parse error at line {line_number}: invalid line: {line}")]
    ParseError {
        /// 1-based line number of the offending line
        line_number: usize,
        /// The raw text of the offending line
        line: String,
    },

    /// A key is not a well-formed dotted path.
    #[error("invalid key '{key}': {reason}")]
    InvalidKey {
        /// The rejected key
        key: String,
        /// Why the key was rejected
        reason: String,
    },

    /// Failed to convert a stored value to the requested type.
    #[error("failed to convert value for key '{key}' to type {target_type}: {source}")]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The stored value is not one of the accepted boolean tokens.
    #[error("invalid boolean value \"{value}\" for key '{key}'")]
    InvalidBoolean {
        /// The key being converted
        key: String,
        /// The rejected value
        value: String,
    },

    /// The underlying input source could not be opened or read.
    #[error("properties source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that failed
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PropertiesError {
    /// Returns `true` if this is the [`PropertiesError::NodeNotFound`] sentinel.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PropertiesError::NodeNotFound)
    }

    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        PropertiesError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        PropertiesError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }
}

/// A specialized Result type for properties operations.
pub type Result<T> = std::result::Result<T, PropertiesError>;
