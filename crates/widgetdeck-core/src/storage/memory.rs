//! In-memory storage implementation.

use super::{LayoutStore, SavedLayout, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStore {
    layouts: RwLock<HashMap<String, SavedLayout>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStore for MemoryStore {
    fn save(&self, key: &str, layout: &SavedLayout) -> StorageResult<()> {
        let mut layouts = self
            .layouts
            .write()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        layouts.insert(key.to_string(), layout.clone());
        Ok(())
    }

    fn load(&self, key: &str) -> StorageResult<SavedLayout> {
        let layouts = self
            .layouts
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        layouts
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        let mut layouts = self
            .layouts
            .write()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        layouts.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        let layouts = self
            .layouts
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        Ok(layouts.contains_key(key))
    }
}
