//! Storage abstraction for layout persistence.

mod autosave;
mod file;
mod memory;

pub use autosave::LayoutSaver;
pub use file::FileStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use crate::dashboard::WidgetConfig;
use crate::layout::{WidgetEntry, WidgetId};

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Layout not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// One widget as written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredWidget {
    pub id: WidgetId,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub props: Value,
}

/// A saved dashboard layout: widgets in display order.
///
/// Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedLayout {
    pub widgets: Vec<StoredWidget>,
}

impl SavedLayout {
    pub fn from_entries(entries: &[WidgetEntry<WidgetConfig>]) -> Self {
        let widgets = entries
            .iter()
            .map(|entry| StoredWidget {
                id: entry.id().clone(),
                kind: entry.content().kind.clone(),
                props: entry.content().props.clone(),
            })
            .collect();
        Self { widgets }
    }

    /// Turn the saved widgets back into an initial layout.
    pub fn into_layout(self) -> Vec<(WidgetId, WidgetConfig)> {
        self.widgets
            .into_iter()
            .map(|widget| (widget.id, WidgetConfig::with_props(widget.kind, widget.props)))
            .collect()
    }

    pub fn to_json(&self) -> StorageResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> StorageResult<Self> {
        serde_json::from_str(json).map_err(|e| StorageError::Serialization(e.to_string()))
    }
}

/// Trait for layout storage backends.
///
/// Implementations can keep layouts in memory or on the filesystem.
pub trait LayoutStore: Send + Sync {
    /// Save a layout under `key`.
    fn save(&self, key: &str, layout: &SavedLayout) -> StorageResult<()>;

    /// Load the layout saved under `key`.
    fn load(&self, key: &str) -> StorageResult<SavedLayout>;

    /// Delete the layout saved under `key`.
    fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check if a layout exists under `key`.
    fn exists(&self, key: &str) -> StorageResult<bool>;
}
