// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer.
//!
//! Provides [`Properties`], the read-only facade over a parsed tree.

pub mod properties;

pub use properties::Properties;
