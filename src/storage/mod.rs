//! Flat-file persistence for the watch list
//!
//! Two plain text files back the application state:
//! - the item list, one item per line
//! - the currently watching value, the whole file content
//!
//! Both files are rewritten in full on every change. Load failures are not
//! fatal: callers get an explicit [`StorageError`] and continue with empty
//! state.

pub mod items;
pub mod watching;

pub use items::ItemStore;
pub use watching::WatchingTracker;

use log::warn;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// I/O failure while reading or writing one of the data files
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Path of the file the failed operation touched
    pub fn path(&self) -> &Path {
        match self {
            StorageError::Read { path, .. } | StorageError::Write { path, .. } => path,
        }
    }

    /// True when the file simply does not exist yet
    pub fn is_not_found(&self) -> bool {
        match self {
            StorageError::Read { source, .. } | StorageError::Write { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
        }
    }
}

/// Read a data file as a list of lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line, and a final terminator does
/// not add an empty line. Bytes that are not valid UTF-8 are replaced with
/// U+FFFD so every line is kept.
pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>, StorageError> {
    let bytes = std::fs::read(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        warn!("{} is not valid UTF-8, invalid bytes were replaced", path.display());
    }

    Ok(split_lines(&text))
}

fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                lines.push(rest[..end].to_string());
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }
    lines
}

/// Validation failure for a list mutation requested by the user
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("item text is empty")]
    Empty,

    #[error("'{0}' is already in the list")]
    Duplicate(String),

    #[error("'{0}' is not in the list")]
    NotFound(String),
}
