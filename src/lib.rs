// SPDX-License-Identifier: MIT OR Apache-2.0

//! An INI-style properties loader backed by a hierarchical key tree.
//!
//! Input text is parsed line by line into a tree addressed by dotted keys
//! (`section.subsection.key`), which is then read through typed getters.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`PropertyKey`, `PropertyValue`, `KeyTree`, errors)
//! - **Ports**: The `TreeParser` trait that turns text into a tree
//! - **Adapters**: The INI line parser and the file loader
//! - **Service**: The read-only `Properties` facade
//!
//! # Format
//!
//! ```text
//! # comments run to the end of the line
//! source = some source
//! bind_port = 9345
//!
//! [section1]          # prefixes the keys below with "section1."
//! float = 4.5
//! bool.true = yes
//! color = \#00ff00     # `\#` is a literal `#`
//! share = \\host        # `\\` is a literal backslash
//! ```
//!
//! Any other backslash is kept as written.
//!
//! # Quick Start
//!
//! ```rust
//! use keyprops::prelude::*;
//!
//! # fn main() -> keyprops::domain::Result<()> {
//! let props: Properties = "bind_port = 9345\n[section1]\nbool.true = yes".parse()?;
//!
//! assert_eq!(props.get_int("bind_port")?, 9345);
//! assert!(props.get_bool("section1.bool.true")?);
//! assert!(props.subkeys("section1")?.contains("bool"));
//! assert!(props.get_string("missing").unwrap_err().is_not_found());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::IniParser;
    pub use crate::domain::{KeyTree, PropertiesError, PropertyKey, PropertyValue, Result};
    pub use crate::ports::TreeParser;
    pub use crate::service::Properties;
}
