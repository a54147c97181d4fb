// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI-style line parser.
//!
//! Each line is comment-stripped and trimmed, then classified as blank,
//! `[section.name]` header or `key = value` assignment. Keys assigned after a
//! header are prefixed with the section name. Any other line aborts the parse.

use crate::domain::{KeyTree, PropertiesError, PropertyKey, Result};
use crate::ports::TreeParser;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::io::BufRead;

/// `[identifier]` on a trimmed line.
static SECTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([A-Za-z0-9_.]+)\]$").unwrap());

/// `identifier = value` on a trimmed line.
static ASSIGNMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9_.]+)\s*=\s*(.*)$").unwrap());

const COMMENT_MARKER: char = '#';
const ESCAPE: char = '\\';

/// Parser for the INI-like properties format.
///
/// # Examples
///
/// ```rust
/// use keyprops::adapters::IniParser;
/// use keyprops::ports::TreeParser;
///
/// let tree = IniParser::new()
///     .parse("port = 80 # http\n[tls]\nport = 443")
///     .unwrap();
/// assert_eq!(tree.find("port").unwrap().value(), Some("80"));
/// assert_eq!(tree.find("tls.port").unwrap().value(), Some("443"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IniParser;

/// What a single cleaned-up line turned out to be.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Blank,
    Section(&'a str),
    Assignment(&'a str, &'a str),
}

impl IniParser {
    /// Creates a new INI parser.
    pub fn new() -> Self {
        IniParser
    }

    /// Cuts the line at the first unescaped `#` and trims it.
    ///
    /// `\#` stands for a literal `#` and `\\` for a literal backslash. Any
    /// other backslash is kept as written.
    fn clean(line: &str) -> Cow<'_, str> {
        if !line.contains(ESCAPE) {
            let end = line.find(COMMENT_MARKER).unwrap_or(line.len());
            return Cow::Borrowed(line[..end].trim());
        }

        let mut out = String::with_capacity(line.len());
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                COMMENT_MARKER => break,
                ESCAPE => match chars.peek() {
                    Some(&next) if next == COMMENT_MARKER || next == ESCAPE => {
                        out.push(next);
                        chars.next();
                    }
                    _ => out.push(c),
                },
                _ => out.push(c),
            }
        }
        Cow::Owned(out.trim().to_string())
    }

    fn classify(line: &str) -> Option<Line<'_>> {
        if line.is_empty() {
            return Some(Line::Blank);
        }
        if let Some(caps) = SECTION_REGEX.captures(line) {
            return caps.get(1).map(|m| Line::Section(m.as_str()));
        }
        let caps = ASSIGNMENT_REGEX.captures(line)?;
        match (caps.get(1), caps.get(2)) {
            (Some(key), Some(value)) => Some(Line::Assignment(key.as_str(), value.as_str())),
            _ => None,
        }
    }
}

fn invalid_line(line_number: usize, raw: &str) -> PropertiesError {
    PropertiesError::ParseError {
        line_number,
        line: raw.to_string(),
    }
}

impl TreeParser for IniParser {
    fn parse_reader(&self, reader: &mut dyn BufRead) -> Result<KeyTree> {
        let mut tree = KeyTree::new();
        let mut current_section = String::new();
        let mut assignments = 0usize;

        for (idx, raw) in reader.lines().enumerate() {
            let raw = raw?;
            let line_number = idx + 1;
            let cleaned = Self::clean(&raw);

            match Self::classify(&cleaned) {
                Some(Line::Blank) => {}
                Some(Line::Section(name)) => {
                    PropertyKey::from(name)
                        .validate()
                        .map_err(|_| invalid_line(line_number, &raw))?;
                    tracing::trace!("Entering section '{}' at line {}", name, line_number);
                    current_section = format!("{}.", name);
                }
                Some(Line::Assignment(key, value)) => {
                    let full_key = format!("{}{}", current_section, key);
                    PropertyKey::from(full_key.as_str())
                        .validate()
                        .map_err(|_| invalid_line(line_number, &raw))?;
                    tree.put(&full_key, value)?;
                    assignments += 1;
                }
                None => return Err(invalid_line(line_number, &raw)),
            }
        }

        tracing::debug!(
            "Parsed {} assignments into {} valued keys",
            assignments,
            tree.len()
        );

        Ok(tree)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["ini", "properties", "conf", "cfg"]
    }
}
