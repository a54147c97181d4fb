// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// A configuration exercising sections, comments and every typed getter.
#[allow(dead_code)]
pub const VALID_CONFIGURATION: &str = "
# test configuration file

source = some source
destination = some destination # with comment
bind_port = 9345

[section1]
float = 4.5
bool.true = yes
bool.false = 0
";

/// A configuration with one malformed line before a valid one.
#[allow(dead_code)]
pub const INVALID_CONFIGURATION: &str = "
# test configuration
this is an invalid line
this_is = valid one
";

/// Writes `data` to a fresh temporary file that lives as long as the handle.
#[allow(dead_code)]
pub fn temp_config_file(data: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(data.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
