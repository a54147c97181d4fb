// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! The traits here are implemented by the adapters layer.

pub mod parser;

pub use parser::TreeParser;
