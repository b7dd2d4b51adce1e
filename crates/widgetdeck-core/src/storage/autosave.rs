//! Saving the layout on every change.

use crate::dashboard::WidgetConfig;
use crate::layout::{PersistHook, WidgetEntry};
use crate::storage::{LayoutStore, SavedLayout, StorageResult};
use std::sync::Arc;

/// Writes the layout to a store whenever the layout controller commits a change.
///
/// Save failures are logged and remembered, never reported back to the
/// controller: the in-memory order stays authoritative.
pub struct LayoutSaver<S: LayoutStore> {
    storage: Arc<S>,
    /// Key the layout is stored under.
    key: String,
    /// Successful saves so far.
    save_count: usize,
    /// Message of the most recent failed save, cleared by the next success.
    last_error: Option<String>,
}

impl<S: LayoutStore> LayoutSaver<S> {
    pub fn new(storage: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            save_count: 0,
            last_error: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }

    /// Whether the most recent save failed, and why.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Load the layout stored under this saver's key.
    pub fn load(&self) -> StorageResult<SavedLayout> {
        self.storage.load(&self.key)
    }

    /// Save `layout` now, reporting the result to the caller.
    pub fn save(&mut self, layout: &SavedLayout) -> StorageResult<()> {
        match self.storage.save(&self.key, layout) {
            Ok(()) => {
                self.save_count += 1;
                self.last_error = None;
                log::debug!("Saved layout '{}' ({} widgets)", self.key, layout.widgets.len());
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

impl<S: LayoutStore> PersistHook<WidgetConfig> for LayoutSaver<S> {
    fn persist(&mut self, entries: &[WidgetEntry<WidgetConfig>]) {
        if let Err(e) = self.save(&SavedLayout::from_entries(entries)) {
            log::warn!("Failed to save layout '{}': {}", self.key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_layout;
    use crate::layout::{LayoutController, NoPersist, WidgetId};
    use crate::storage::{MemoryStore, StorageError};

    /// A store whose writes always fail.
    struct ReadOnlyStore;

    impl LayoutStore for ReadOnlyStore {
        fn save(&self, _key: &str, _layout: &SavedLayout) -> StorageResult<()> {
            Err(StorageError::Io("read-only".to_string()))
        }

        fn load(&self, key: &str) -> StorageResult<SavedLayout> {
            Err(StorageError::NotFound(key.to_string()))
        }

        fn delete(&self, _key: &str) -> StorageResult<()> {
            Ok(())
        }

        fn exists(&self, _key: &str) -> StorageResult<bool> {
            Ok(false)
        }
    }

    #[test]
    fn test_saver_persists_every_mutation() {
        let storage = Arc::new(MemoryStore::new());
        let saver = LayoutSaver::new(storage.clone(), "dashboard-layout");
        let mut layout = LayoutController::new(default_layout(), saver);

        layout.reorder(&WidgetId::new("table-1"), 0);
        layout.remove(&WidgetId::new("stats-2"));

        assert_eq!(layout.hook().save_count(), 2);
        let saved = storage.load("dashboard-layout").unwrap();
        assert_eq!(saved.widgets.len(), 7);
        assert_eq!(saved.widgets[0].id.as_str(), "table-1");
        assert!(saved.widgets.iter().all(|w| w.id.as_str() != "stats-2"));
    }

    #[test]
    fn test_save_failure_does_not_roll_back() {
        let saver = LayoutSaver::new(Arc::new(ReadOnlyStore), "dashboard-layout");
        let mut layout = LayoutController::new(default_layout(), saver);

        assert!(layout.reorder(&WidgetId::new("table-1"), 0));
        assert_eq!(layout.order()[0].as_str(), "table-1");
        assert_eq!(layout.hook().save_count(), 0);
        assert!(layout.hook().last_error().unwrap().contains("read-only"));
    }

    #[test]
    fn test_saver_writes_under_its_key() {
        let storage = Arc::new(MemoryStore::new());
        let mut saver = LayoutSaver::new(storage.clone(), "team-board");
        assert_eq!(saver.key(), "team-board");
        assert!(Arc::ptr_eq(saver.storage(), &storage));

        saver.persist(&LayoutController::new(default_layout(), NoPersist).into_entries());
        assert!(storage.exists("team-board").unwrap());
        assert!(!storage.exists("dashboard-layout").unwrap());
    }

    #[test]
    fn test_success_clears_last_error() {
        let storage = Arc::new(MemoryStore::new());
        let mut saver = LayoutSaver::new(storage, "k");
        saver.last_error = Some("earlier".to_string());

        saver.save(&SavedLayout::default()).unwrap();
        assert_eq!(saver.last_error(), None);
        assert_eq!(saver.load().unwrap(), SavedLayout::default());
    }
}
