//! widgetdeck core library
//!
//! Layout and drag-reorder engine for a customizable widget dashboard.
//! Widgets are kept in a single owned order; per-widget wrappers turn
//! drag-primitive callbacks into reorder and removal requests.

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod drag;
pub mod layout;
pub mod storage;
pub mod widget;

pub use catalog::{default_layout, CatalogItem, WidgetCatalog};
pub use config::{ConfigError, DashboardConfig};
pub use dashboard::{Dashboard, DashboardRow, WidgetConfig};
pub use drag::{DragEvent, DropLocation, DropOutcome, DropTarget, DropTargets};
pub use layout::{LayoutController, NoPersist, OrderHook, PersistHook, WidgetEntry, WidgetId};
pub use storage::{FileStore, LayoutSaver, LayoutStore, MemoryStore, SavedLayout, StorageError};
pub use widget::{
    DragPhase, DragSession, GestureEnd, LayoutRequest, WidgetManager, WidgetVisuals, WidgetWrapper,
};
