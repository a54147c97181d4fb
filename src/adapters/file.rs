// SPDX-License-Identifier: MIT OR Apache-2.0

//! File loading for properties sources.
//!
//! Opens a properties file, guards against oversized input and hands a
//! buffered reader to a parser. Also resolves the OS-appropriate default
//! location through `directories`.

use crate::domain::{KeyTree, PropertiesError, Result};
use crate::ports::TreeParser;
use directories::ProjectDirs;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Maximum accepted size for a properties file (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File name used by [`default_location`].
pub const DEFAULT_FILE_NAME: &str = "config.ini";

const SOURCE_NAME: &str = "file";

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

fn source_error(message: String, err: Option<std::io::Error>) -> PropertiesError {
    PropertiesError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message,
        source: err.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
    }
}

/// Parses the file at `path` with `parser`.
///
/// The path is canonicalized first and files larger than [`MAX_FILE_SIZE`]
/// are rejected before any content is read.
///
/// # Examples
///
/// ```rust,no_run
/// use keyprops::adapters::{file, IniParser};
///
/// let tree = file::parse_file("/etc/myapp/config.ini", &IniParser::new()).unwrap();
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P, parser: &dyn TreeParser) -> Result<KeyTree> {
    let path = path.as_ref();

    let canonical_path = path.canonicalize().map_err(|e| {
        source_error(
            format!("Invalid or inaccessible path: {}", display_name(path)),
            Some(e),
        )
    })?;

    let metadata = fs::metadata(&canonical_path).map_err(|e| {
        source_error(
            format!(
                "Failed to read file metadata: {}",
                display_name(&canonical_path)
            ),
            Some(e),
        )
    })?;

    if metadata.len() > MAX_FILE_SIZE {
        return Err(source_error(
            format!(
                "Properties file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_FILE_SIZE
            ),
            None,
        ));
    }

    let file = File::open(&canonical_path).map_err(|e| {
        source_error(
            format!(
                "Failed to open properties file: {}",
                display_name(&canonical_path)
            ),
            Some(e),
        )
    })?;

    tracing::debug!(
        "Loading properties from {} ({} bytes)",
        canonical_path.display(),
        metadata.len()
    );

    let mut reader = BufReader::new(file);
    parser.parse_reader(&mut reader)
}

/// Resolves `<config dir>/<filename>` for the application.
///
/// # Arguments
///
/// * `app_name` - The application name (e.g., "myapp")
/// * `qualifier` - The organization/qualifier (e.g., "com.example")
/// * `filename` - The file name inside the configuration directory
pub fn location_for(app_name: &str, qualifier: &str, filename: &str) -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
        source_error("Failed to determine project directories".to_string(), None)
    })?;

    Ok(proj_dirs.config_dir().join(filename))
}

/// Resolves `<config dir>/config.ini` for the application.
pub fn default_location(app_name: &str, qualifier: &str) -> Result<PathBuf> {
    location_for(app_name, qualifier, DEFAULT_FILE_NAME)
}
