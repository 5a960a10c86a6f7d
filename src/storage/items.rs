//! Ordered, duplicate-free item list mirrored to a line-oriented text file

use super::{read_lines, ItemError, StorageError};
use log::{error, info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// In-memory item list plus the file it is persisted to.
///
/// Items keep insertion order, which is also the display and storage order.
/// Uniqueness and removal use exact, case-sensitive string comparison.
#[derive(Debug, Clone)]
pub struct ItemStore {
    path: PathBuf,
    items: Vec<String>,
}

impl ItemStore {
    /// Create an empty store bound to `path` without touching the disk
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            items: Vec::new(),
        }
    }

    /// Create a store and load whatever the file currently holds.
    ///
    /// A missing or unreadable file is logged and leaves the store empty.
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        let mut store = Self::new(path);
        match store.load() {
            Ok(count) => info!("Loaded {} items from {}", count, store.path.display()),
            Err(e) => warn!("Error loading items: {}", e),
        }
        store
    }

    /// Replace the in-memory list with the file contents, one item per line.
    ///
    /// Blank lines are kept as items. On failure the list is left empty.
    pub fn load(&mut self) -> Result<usize, StorageError> {
        self.items.clear();
        self.items = read_lines(&self.path)?;
        Ok(self.items.len())
    }

    /// Overwrite the file with the current list
    pub fn save(&self) -> Result<(), StorageError> {
        let write = || -> std::io::Result<()> {
            let mut writer = BufWriter::new(File::create(&self.path)?);
            for item in &self.items {
                writer.write_all(item.as_bytes())?;
                writer.write_all(b"\n")?;
            }
            writer.flush()
        };

        write().map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Append a trimmed, non-empty, not-yet-present item and persist the list.
    ///
    /// Returns the stored item. Persistence is best effort: a failed save is
    /// logged and the item stays in memory.
    pub fn add(&mut self, text: &str) -> Result<String, ItemError> {
        let item = text.trim();
        if item.is_empty() {
            return Err(ItemError::Empty);
        }
        if self.contains(item) {
            return Err(ItemError::Duplicate(item.to_string()));
        }

        self.items.push(item.to_string());
        self.persist();
        Ok(item.to_string())
    }

    /// Remove the first exact match of the trimmed text and persist the list
    pub fn remove(&mut self, text: &str) -> Result<String, ItemError> {
        let target = text.trim();
        let index = self
            .items
            .iter()
            .position(|item| item == target)
            .ok_or_else(|| ItemError::NotFound(target.to_string()))?;

        let removed = self.items.remove(index);
        self.persist();
        Ok(removed)
    }

    /// Read-only view of the ordered list
    pub fn snapshot(&self) -> &[String] {
        &self.items
    }

    /// Items joined one per line, in list order
    pub fn display_text(&self) -> String {
        self.items.join("\n")
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            error!("Error saving items: {}", e);
        }
    }
}
