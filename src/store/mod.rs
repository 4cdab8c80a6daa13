//! Canonical layout store with debounced persistence
//!
//! The store owns the one authoritative [`Layout`]. Reads always see the
//! latest write; durable writes lag behind for `save` (debounced) and are
//! immediate for `add_item` / `remove_item`.
//!
//! Debouncing is a single slot stamped with a revision. Every `save` takes a
//! new revision and returns it; the caller arms a timer carrying that
//! revision, and when the timer fires [`LayoutStore::flush_pending`] writes
//! only if the revision is still the pending one. Rescheduling, `reset` and
//! `teardown` therefore cancel earlier timers without touching them.

mod storage;

pub use storage::{FileStorage, MemoryStorage, Storage};

use crate::model::layout::{Layout, LayoutItem};

/// Storage key for the dashboard layout
pub const LAYOUT_STORAGE_KEY: &str = "now-dashboard-layout-v2";

/// Quiet period before a debounced save reaches storage (milliseconds)
pub const SAVE_DEBOUNCE_MS: u64 = 300;

/// Owner of the canonical layout
#[derive(Debug)]
pub struct LayoutStore {
    key: String,
    default_layout: Layout,
    layout: Layout,
    storage: Box<dyn Storage>,
    debounce_ms: u64,
    /// Last revision handed out by `save`
    revision: u64,
    /// Revision of the write waiting for its timer, if any
    pending: Option<u64>,
    /// What storage is known to hold under `key`
    persisted: Option<Layout>,
}

/// Read a layout from storage, falling back to `default`
///
/// Absent values, unparsable JSON and empty arrays all count as missing.
pub fn load(storage: &dyn Storage, key: &str, default: &Layout) -> Layout {
    let Some(raw) = storage.get(key) else {
        tracing::debug!("No stored layout under '{}', using defaults", key);
        return default.clone();
    };

    match serde_json::from_str::<Vec<LayoutItem>>(&raw) {
        Ok(items) if !items.is_empty() => {
            let stored = items.len();
            let layout = Layout::new(items);
            if layout.len() != stored {
                tracing::warn!(
                    "Stored layout '{}' repeats ids, keeping {} of {} items",
                    key,
                    layout.len(),
                    stored
                );
            }
            tracing::info!("Loaded layout '{}' ({} items)", key, layout.len());
            layout
        }
        Ok(_) => {
            tracing::debug!("Stored layout '{}' is empty, using defaults", key);
            default.clone()
        }
        Err(e) => {
            tracing::warn!("Ignoring corrupt layout under '{}': {}", key, e);
            default.clone()
        }
    }
}

impl LayoutStore {
    /// Open the store, loading the canonical layout from `storage`
    pub fn open(
        storage: Box<dyn Storage>,
        key: impl Into<String>,
        default_layout: Layout,
        debounce_ms: u64,
    ) -> Self {
        let key = key.into();
        let layout = load(storage.as_ref(), &key, &default_layout);

        Self {
            key,
            default_layout,
            layout,
            storage,
            debounce_ms,
            revision: 0,
            pending: None,
            persisted: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The canonical layout
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn default_layout(&self) -> &Layout {
        &self.default_layout
    }

    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    pub fn has_pending_write(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace the canonical layout and schedule a debounced write
    ///
    /// Returns the revision the caller must arm the debounce timer with.
    pub fn save(&mut self, layout: Layout) -> u64 {
        self.layout = layout;
        self.revision = self.revision.wrapping_add(1);
        self.pending = Some(self.revision);
        tracing::trace!("Layout save scheduled (rev {})", self.revision);
        self.revision
    }

    /// Timer callback: write the latest layout if `revision` is still pending
    ///
    /// Returns whether a durable write happened.
    pub fn flush_pending(&mut self, revision: u64) -> bool {
        if self.pending != Some(revision) {
            tracing::trace!(
                "Skipping superseded layout write (rev {} != {:?})",
                revision,
                self.pending
            );
            return false;
        }
        self.pending = None;
        self.persist()
    }

    /// Append an item and persist immediately
    pub fn add_item(&mut self, item: LayoutItem) {
        self.layout.push(item);
        self.pending = None;
        self.persist();
    }

    /// Remove the item with `id` and persist immediately
    pub fn remove_item(&mut self, id: &str) -> bool {
        let removed = self.layout.remove(id);
        self.pending = None;
        self.persist();
        removed
    }

    /// Edit one item in place through the debounced path
    ///
    /// Returns the debounce revision, or `None` if no item has `id`.
    pub fn update_item(&mut self, id: &str, edit: impl FnOnce(&mut LayoutItem)) -> Option<u64> {
        let mut next = self.layout.clone();
        edit(next.get_mut(id)?);
        Some(self.save(next))
    }

    /// Clear storage and replace the canonical layout
    ///
    /// Uses `override_layout` if given, else the default layout. Any pending
    /// debounced write is cancelled.
    pub fn reset(&mut self, override_layout: Option<Layout>) {
        self.pending = None;
        if let Err(e) = self.storage.remove(&self.key) {
            tracing::warn!("Failed to clear stored layout '{}': {}", self.key, e);
        }
        self.persisted = None;
        self.layout = override_layout.unwrap_or_else(|| self.default_layout.clone());
        tracing::info!("Layout reset ({} items)", self.layout.len());
    }

    /// Cancel any pending debounced write
    pub fn teardown(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("Cancelled pending layout write on teardown");
        }
    }

    /// Write the canonical layout unless storage already holds it
    fn persist(&mut self) -> bool {
        if self.persisted.as_ref() == Some(&self.layout) {
            tracing::trace!("Stored layout already current, skipping write");
            return false;
        }

        let json = match serde_json::to_string(&self.layout) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize layout: {}", e);
                return false;
            }
        };

        match self.storage.set(&self.key, &json) {
            Ok(()) => {
                tracing::debug!("Persisted layout '{}' ({} items)", self.key, self.layout.len());
                self.persisted = Some(self.layout.clone());
                true
            }
            Err(e) => {
                tracing::warn!("Failed to persist layout '{}': {}", self.key, e);
                false
            }
        }
    }
}
