//! Command handlers behind the three window actions.
//!
//! [`Watchlist`] owns the item store and the currently watching tracker. It is
//! built once at startup and handed to the UI, which calls one handler per
//! button press. Nothing here depends on terminal or widget types.

use crate::config::StorageConfig;
use crate::selection::{self, SelectionError};
use crate::storage::{ItemError, ItemStore, WatchingTracker};
use log::info;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Watchlist {
    items: ItemStore,
    watching: WatchingTracker,
}

impl Watchlist {
    pub fn new(items: ItemStore, watching: WatchingTracker) -> Self {
        Self { items, watching }
    }

    /// Load both data files named by the storage configuration
    pub fn open(config: &StorageConfig) -> Self {
        Self::new(
            ItemStore::open(&config.items_file),
            WatchingTracker::open(&config.currently_watching_file),
        )
    }

    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    pub fn watching(&self) -> &WatchingTracker {
        &self.watching
    }

    /// Add the input field text to the list
    pub fn add_item(&mut self, input: &str) -> Result<String, ItemError> {
        let item = self.items.add(input)?;
        info!("Added '{}' ({} items)", item, self.items.len());
        Ok(item)
    }

    /// Pick a random item and persist it as currently watching
    pub fn select_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String, SelectionError> {
        let picked = selection::pick_random(self.items.snapshot(), rng)?.to_string();
        self.watching.set(&picked);
        info!("Selected '{}'", picked);
        Ok(picked)
    }

    /// Remove `target` from the list.
    ///
    /// The UI passes the currently watching field text here, not a selection
    /// from the item view. The tracker itself is left as is.
    pub fn remove_item(&mut self, target: &str) -> Result<String, ItemError> {
        let removed = self.items.remove(target)?;
        info!("Removed '{}' ({} items)", removed, self.items.len());
        Ok(removed)
    }
}
