// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! Keys, values, the key tree and the error type live here. Nothing in this
//! layer knows about text formats or files.

pub mod errors;
pub mod key_tree;
pub mod property_key;
pub mod property_value;

// Re-export commonly used types
pub use errors::{PropertiesError, Result};
pub use key_tree::{KeyTree, Node};
pub use property_key::PropertyKey;
pub use property_value::PropertyValue;
