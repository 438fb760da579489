//! In-process key-value medium.

use super::KeyValueStore;
use crate::result::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory key-value medium.
///
/// Clones share the same map, so a test can hand one clone to a `LocalStore`
/// and inspect what was persisted through another.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock()?;
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock()?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock()?;
        entries.remove(key);
        Ok(())
    }
}
