//! Dashboard configuration.

use crate::drag::{DEFAULT_BOARD_DROPPABLE, DEFAULT_REMOVAL_DROPPABLE, DropTargets};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default key the layout is saved under.
pub const DEFAULT_STORAGE_KEY: &str = "dashboard-layout";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Host-level settings for a dashboard. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Key the layout is saved under.
    pub storage_key: String,
    /// Identifier of the reorder surface.
    pub board_droppable: String,
    /// Identifier of the removal target.
    pub removal_droppable: String,
    /// Directory for file-backed layouts. `None` uses the platform data dir.
    pub storage_dir: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            board_droppable: DEFAULT_BOARD_DROPPABLE.to_string(),
            removal_droppable: DEFAULT_REMOVAL_DROPPABLE.to_string(),
            storage_dir: None,
        }
    }
}

impl DashboardConfig {
    /// Read a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".to_string()));
        }
        if self.board_droppable == self.removal_droppable {
            return Err(ConfigError::Invalid(format!(
                "board and removal droppables must differ (both '{}')",
                self.board_droppable
            )));
        }
        Ok(())
    }

    pub fn drop_targets(&self) -> DropTargets {
        DropTargets::new(self.board_droppable.clone(), self.removal_droppable.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.storage_key, "dashboard-layout");
        assert_eq!(config.drop_targets(), DropTargets::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("widgetdeck.json");
        std::fs::write(&path, r#"{"removal_droppable": "trash"}"#).unwrap();

        let config = DashboardConfig::from_json_file(&path).unwrap();
        assert_eq!(config.removal_droppable, "trash");
        assert_eq!(config.board_droppable, "dashboard");
        assert_eq!(config.storage_dir, None);
    }

    #[test]
    fn test_rejects_bad_files() {
        let dir = tempdir().unwrap();

        let missing = DashboardConfig::from_json_file(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "storage_key = 1").unwrap();
        assert!(matches!(DashboardConfig::from_json_file(&path), Err(ConfigError::Parse { .. })));

        std::fs::write(&path, r#"{"board_droppable": "catalog"}"#).unwrap();
        assert!(matches!(DashboardConfig::from_json_file(&path), Err(ConfigError::Invalid(_))));
    }
}
