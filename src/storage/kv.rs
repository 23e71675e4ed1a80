//! Key-value store abstraction.
//!
//! The planner only needs `get` and `set` on string values. Writes are
//! last-write-wins with a single local writer. `set_many` is all or nothing.

use std::collections::HashMap;

use super::error::StorageResult;

/// A string key-value store.
pub trait KeyValueStore {
    /// Read a value, `None` when the key is absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Write several values at once. Either every entry is stored or none is.
    fn set_many(&mut self, entries: &[(&str, String)]) -> StorageResult<()>;

    /// Delete a key. Returns whether it existed.
    fn remove(&mut self, key: &str) -> StorageResult<bool>;
}

/// In-memory store, mainly for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> StorageResult<()> {
        for (key, value) in entries {
            self.entries.insert(key.to_string(), value.clone());
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<bool> {
        Ok(self.entries.remove(key).is_some())
    }
}
