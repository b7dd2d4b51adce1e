//! Recorded host sessions and their replay.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use widgetdeck_core::{
    ConfigError, Dashboard, DragEvent, DropLocation, LayoutRequest, LayoutStore, StorageError,
    WidgetId,
};

/// Errors surfaced by the replay shell.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("usage: widgetdeck <script.json>")]
    Usage,
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid script {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// One thing the host dashboard did during a recorded session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HostAction {
    /// The edit-mode switch was flipped.
    ToggleEdit,
    /// A drag-primitive callback.
    Drag { event: DragEvent },
    /// "Add widget" was chosen in the catalog.
    AddWidget {
        kind: String,
        #[serde(default)]
        at: Option<usize>,
    },
    /// A catalog card was dropped somewhere.
    DropFromCatalog { kind: String, target: DropLocation },
}

/// What a replay changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub requests: Vec<LayoutRequest>,
    pub added: Vec<WidgetId>,
    pub edit_toggles: usize,
}

/// Read a script: a JSON array of host actions.
pub fn load_script(path: &Path) -> Result<Vec<HostAction>, ReplayError> {
    let json = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| ReplayError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply `actions` to `dashboard` in order.
pub fn replay<S: LayoutStore>(
    dashboard: &mut Dashboard<S>,
    actions: &[HostAction],
) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    for action in actions {
        match action {
            HostAction::ToggleEdit => {
                dashboard.toggle_edit_mode();
                summary.edit_toggles += 1;
            }
            HostAction::Drag { event } => {
                if let Some(request) = dashboard.handle_drag(event) {
                    summary.requests.push(request);
                }
            }
            HostAction::AddWidget { kind, at } => {
                summary.added.extend(dashboard.add_widget(kind, *at));
            }
            HostAction::DropFromCatalog { kind, target } => {
                summary.added.extend(dashboard.drop_from_catalog(kind, target));
            }
        }
    }
    log::info!(
        "Replayed {} actions: {} layout requests, {} widgets added",
        actions.len(),
        summary.requests.len(),
        summary.added.len()
    );
    summary
}
