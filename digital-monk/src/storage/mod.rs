//! Key-value persistence seam and history storage.

pub mod history;

use std::collections::HashMap;

use crate::error::StoreError;

// Storage keys
pub const STORAGE_HISTORY: &str = "digitalMonkFortuneHistory";

/// A string key-value slot store, e.g. the browser's `localStorage`.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str);

    fn contains(&self, key: &str) -> bool {
        self.read(key).is_some()
    }
}

/// In-memory store, used when no persistent storage is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.slots.remove(key);
    }
}
