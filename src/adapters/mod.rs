// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing parser and loader implementations.
//!
//! `ini_parser` implements the [`TreeParser`](crate::ports::TreeParser) port
//! for the INI-like format; `file` reads properties files from disk.

pub mod file;
pub mod ini_parser;

pub use ini_parser::IniParser;
