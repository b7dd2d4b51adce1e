//! File-based layout storage.

use super::{LayoutStore, SavedLayout, StorageError, StorageResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Stores each layout as a JSON file in a directory.
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at `base_path`, creating the directory if needed.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create a file store in the default location.
    ///
    /// On Unix: `~/.local/share/widgetdeck/layouts/`
    /// On Windows: `%LOCALAPPDATA%\widgetdeck\layouts\`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;

        Self::new(base.join("widgetdeck").join("layouts"))
    }

    fn layout_path(&self, key: &str) -> PathBuf {
        let safe_key: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{}.json", safe_key))
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl LayoutStore for FileStore {
    fn save(&self, key: &str, layout: &SavedLayout) -> StorageResult<()> {
        let path = self.layout_path(key);
        let json = layout.to_json()?;
        fs::write(&path, json)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn load(&self, key: &str) -> StorageResult<SavedLayout> {
        let path = self.layout_path(key);
        if !path.exists() {
            return Err(StorageError::NotFound(key.to_string()));
        }

        let json = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&json).map_err(|e| {
            StorageError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.layout_path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                StorageError::Io(format!("Failed to delete {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.layout_path(key).exists())
    }
}
