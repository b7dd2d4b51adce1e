//! Dashboard host: layout, catalog and persistence wired together.

use crate::catalog::{default_layout, CatalogItem, WidgetCatalog};
use crate::config::DashboardConfig;
use crate::drag::{DragEvent, DropLocation, DropTarget};
use crate::layout::{LayoutController, WidgetEntry, WidgetId};
use crate::storage::{LayoutSaver, LayoutStore, SavedLayout, StorageError};
use crate::widget::{LayoutRequest, WidgetVisuals};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// What a dashboard widget shows. Opaque to the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Catalog kind, e.g. `"line-chart"`.
    pub kind: String,
    /// Kind-specific settings.
    #[serde(default)]
    pub props: Value,
}

impl WidgetConfig {
    pub fn new(kind: impl Into<String>) -> Self {
        Self::with_props(kind, Value::Null)
    }

    pub fn with_props(kind: impl Into<String>, props: Value) -> Self {
        Self {
            kind: kind.into(),
            props,
        }
    }
}

/// One widget ready for rendering.
#[derive(Debug, Clone, Copy)]
pub struct DashboardRow<'a> {
    pub entry: &'a WidgetEntry<WidgetConfig>,
    pub visuals: WidgetVisuals,
}

/// The customizable widget dashboard.
pub struct Dashboard<S: LayoutStore> {
    layout: LayoutController<WidgetConfig, LayoutSaver<S>>,
    catalog: WidgetCatalog,
    config: DashboardConfig,
}

impl<S: LayoutStore> Dashboard<S> {
    /// Mount the dashboard, restoring the saved layout if there is one.
    ///
    /// A missing or unreadable saved layout falls back to the default widgets.
    pub fn mount(config: DashboardConfig, storage: Arc<S>) -> Self {
        let saver = LayoutSaver::new(storage, config.storage_key.clone());
        let initial = match saver.load() {
            Ok(saved) => {
                log::info!(
                    "Restored layout '{}' ({} widgets)",
                    config.storage_key,
                    saved.widgets.len()
                );
                saved.into_layout()
            }
            Err(StorageError::NotFound(_)) => {
                log::info!("No saved layout '{}', using defaults", config.storage_key);
                default_layout()
            }
            Err(e) => {
                log::error!("Failed to load saved layout: {}", e);
                default_layout()
            }
        };

        let layout = LayoutController::with_targets(initial, config.drop_targets(), saver);
        Self {
            layout,
            catalog: WidgetCatalog::default(),
            config,
        }
    }

    /// Replace the built-in catalog.
    pub fn with_catalog(mut self, catalog: WidgetCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn layout(&self) -> &LayoutController<WidgetConfig, LayoutSaver<S>> {
        &self.layout
    }

    pub fn catalog(&self) -> &WidgetCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn is_edit_mode(&self) -> bool {
        self.layout.edit_mode()
    }

    /// Switch edit mode. Leaving it cancels any drag and saves the layout.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        let leaving = self.layout.edit_mode() && !enabled;
        self.layout.set_edit_mode(enabled);
        if leaving {
            self.save();
        }
    }

    /// Flip edit mode, returning the new state.
    pub fn toggle_edit_mode(&mut self) -> bool {
        let enabled = !self.is_edit_mode();
        self.set_edit_mode(enabled);
        enabled
    }

    /// Feed one drag-primitive callback to the layout.
    pub fn handle_drag(&mut self, event: &DragEvent) -> Option<LayoutRequest> {
        self.layout.handle_drag(event)
    }

    /// Kinds currently on the dashboard.
    pub fn used_kinds(&self) -> Vec<&str> {
        self.layout
            .entries()
            .iter()
            .map(|entry| entry.content().kind.as_str())
            .collect()
    }

    /// Catalog items that can still be added.
    pub fn available_widgets(&self) -> Vec<&CatalogItem> {
        self.catalog.available(self.used_kinds())
    }

    /// Add a widget of `kind` at `at` (or the end). Only allowed in edit
    /// mode and only for catalog kinds not already on the dashboard.
    pub fn add_widget(&mut self, kind: &str, at: Option<usize>) -> Option<WidgetId> {
        if !self.is_edit_mode() {
            log::debug!("Ignoring add of '{}': edit mode is off", kind);
            return None;
        }
        if self.catalog.get(kind).is_none() {
            log::warn!("Ignoring add of unknown widget kind '{}'", kind);
            return None;
        }
        if self.catalog.is_used(kind, self.used_kinds()) {
            log::debug!("Ignoring add of '{}': already on the dashboard", kind);
            return None;
        }

        let id = WidgetId::generate(kind);
        let index = at.unwrap_or(self.layout.len());
        self.layout
            .insert(id.clone(), WidgetConfig::new(kind), index)
            .then_some(id)
    }

    /// A catalog card of `kind` was dropped at `target`.
    pub fn drop_from_catalog(&mut self, kind: &str, target: &DropLocation) -> Option<WidgetId> {
        match self.layout.widgets().targets().classify(target) {
            DropTarget::Board(index) => self.add_widget(kind, Some(index)),
            DropTarget::Removal | DropTarget::Foreign => None,
        }
    }

    /// Widgets in display order with their visual state.
    pub fn rows(&self) -> Vec<DashboardRow<'_>> {
        self.layout
            .entries()
            .iter()
            .map(|entry| DashboardRow {
                entry,
                visuals: self.layout.visuals(entry.id()),
            })
            .collect()
    }

    /// Whether the dashboard should show its "no widgets added" placeholder.
    pub fn shows_empty_state(&self) -> bool {
        self.layout.is_empty() && self.is_edit_mode()
    }

    /// Write the current layout to storage. Returns true on success.
    pub fn save(&mut self) -> bool {
        let saved = SavedLayout::from_entries(self.layout.entries());
        match self.layout.hook_mut().save(&saved) {
            Ok(()) => {
                log::info!("Saved layout '{}'", self.layout.hook().key());
                true
            }
            Err(e) => {
                log::warn!("Failed to save layout '{}': {}", self.layout.hook().key(), e);
                false
            }
        }
    }

    /// Tear down the dashboard after a final save, returning its widgets.
    pub fn unmount(mut self) -> Vec<WidgetEntry<WidgetConfig>> {
        self.layout.set_edit_mode(false);
        self.save();
        self.layout.into_entries()
    }
}
