//! Durable key/value storage backends
//!
//! String values under string keys, kept on the filesystem by the app and in
//! memory by tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// String key/value storage
pub trait Storage: fmt::Debug {
    /// Read the value under `key`, `None` if absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Delete `key`; deleting an absent key is not an error
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// One file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage rooted at `~/.config/gridboard/storage/`
    pub fn in_config_dir() -> Option<Self> {
        crate::config_paths::storage_dir().map(Self::new)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<key>.json`, with path separators in the key replaced
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.root.join(format!("{}.json", file_name))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    writes: usize,
}

/// In-memory storage with a shared handle
///
/// Clones share the same map, so a test can keep one handle while the store
/// owns another and then inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one value (does not count as a write)
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .inner
            .borrow_mut()
            .values
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Number of successful `set` calls so far
    pub fn write_count(&self) -> usize {
        self.inner.borrow().writes
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.borrow().values.contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.values.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.inner.borrow_mut().values.remove(key);
        Ok(())
    }
}
