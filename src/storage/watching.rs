//! The "currently watching" value and its single-line file

use super::{read_lines, StorageError};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

/// Holds the most recently selected item.
///
/// The backing file contains exactly the value, without a trailing newline.
#[derive(Debug, Clone)]
pub struct WatchingTracker {
    path: PathBuf,
    value: Option<String>,
}

impl WatchingTracker {
    /// Create an unset tracker bound to `path` without touching the disk
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            value: None,
        }
    }

    /// Create a tracker and load the stored value, logging any failure
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        let mut tracker = Self::new(path);
        match tracker.load() {
            Ok(()) => match tracker.get() {
                Some(value) => info!("Currently watching: {}", value),
                None => info!("{} is empty", tracker.path.display()),
            },
            Err(e) => warn!("Error loading currently watching: {}", e),
        }
        tracker
    }

    /// Read the first line of the file.
    ///
    /// An empty file leaves the value unset. On failure the value is left
    /// untouched.
    pub fn load(&mut self) -> Result<(), StorageError> {
        if let Some(line) = read_lines(&self.path)?.into_iter().next() {
            self.value = Some(line);
        }
        Ok(())
    }

    /// Replace the value and overwrite the file with exactly that text.
    ///
    /// A failed write is logged; the in-memory value is still updated.
    pub fn set(&mut self, text: &str) {
        self.value = Some(text.to_string());
        if let Err(e) = self.save() {
            error!("Error saving currently watching: {}", e);
        }
    }

    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StorageError> {
        let content = self.value.as_deref().unwrap_or_default();
        std::fs::write(&self.path, content).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
