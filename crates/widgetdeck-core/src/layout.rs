//! Ordered widget layout and its mutation operations.

use std::collections::HashSet;
use std::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::drag::{DragEvent, DropTargets};
use crate::widget::{LayoutRequest, WidgetManager, WidgetVisuals};

/// Stable identifier of a widget within a layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh id for a widget of the given kind.
    pub fn generate(kind: &str) -> Self {
        Self(format!("{}-{}", kind, Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WidgetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A widget at its current position in the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetEntry<C> {
    id: WidgetId,
    /// Always equal to the entry's position in the owning layout.
    index: usize,
    content: C,
}

impl<C> WidgetEntry<C> {
    pub(crate) fn new(id: WidgetId, index: usize, content: C) -> Self {
        Self { id, index, content }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn content(&self) -> &C {
        &self.content
    }
}

/// Receives the full layout after every successful mutation.
///
/// Fire-and-forget: the controller neither waits for nor observes the result.
pub trait PersistHook<C> {
    fn persist(&mut self, entries: &[WidgetEntry<C>]);
}

/// Hook that persists nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPersist;

impl<C> PersistHook<C> for NoPersist {
    fn persist(&mut self, _entries: &[WidgetEntry<C>]) {}
}

/// Adapts a closure taking the ordered id list into a [`PersistHook`].
pub struct OrderHook<F>(pub F);

impl<C, F: FnMut(&[WidgetId])> PersistHook<C> for OrderHook<F> {
    fn persist(&mut self, entries: &[WidgetEntry<C>]) {
        let order: Vec<WidgetId> = entries.iter().map(|entry| entry.id.clone()).collect();
        (self.0)(&order)
    }
}

/// Owns the ordered widget collection and the edit-mode flag.
///
/// The sequence is only reachable through `reorder`, `remove` and
/// `insert`, so every entry's index matches its position at all times and
/// no id appears twice.
pub struct LayoutController<C, H = NoPersist> {
    entries: Vec<WidgetEntry<C>>,
    edit_mode: bool,
    widgets: WidgetManager,
    hook: H,
}

impl<C, H: PersistHook<C>> LayoutController<C, H> {
    /// Mount a layout from its initial order, using the default drop targets.
    pub fn new(initial: impl IntoIterator<Item = (WidgetId, C)>, hook: H) -> Self {
        Self::with_targets(initial, DropTargets::default(), hook)
    }

    /// Mount a layout with custom drop target identifiers.
    ///
    /// Later occurrences of an id already seen are dropped.
    pub fn with_targets(
        initial: impl IntoIterator<Item = (WidgetId, C)>,
        targets: DropTargets,
        hook: H,
    ) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for (id, content) in initial {
            if !seen.insert(id.clone()) {
                log::warn!("Dropping duplicate widget id {} from initial layout", id);
                continue;
            }
            entries.push(WidgetEntry::new(id, entries.len(), content));
        }

        let mut widgets = WidgetManager::new(targets);
        widgets.sync(&entries, false);

        log::debug!("Mounted layout with {} widgets", entries.len());
        Self {
            entries,
            edit_mode: false,
            widgets,
            hook,
        }
    }

    pub fn entries(&self) -> &[WidgetEntry<C>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Ids in display order.
    pub fn order(&self) -> Vec<WidgetId> {
        self.entries.iter().map(|entry| entry.id.clone()).collect()
    }

    pub fn position(&self, id: &WidgetId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.id == id)
    }

    pub fn get(&self, id: &WidgetId) -> Option<&WidgetEntry<C>> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn contains(&self, id: &WidgetId) -> bool {
        self.position(id).is_some()
    }

    /// The per-widget wrappers.
    pub fn widgets(&self) -> &WidgetManager {
        &self.widgets
    }

    pub fn visuals(&self, id: &WidgetId) -> WidgetVisuals {
        self.widgets.visuals(id)
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn hook_mut(&mut self) -> &mut H {
        &mut self.hook
    }

    /// Move `id` to `target_index` of the remaining sequence.
    ///
    /// Unknown ids are ignored. Indices past the end are clamped to the
    /// last slot. Returns true if the layout was updated (including a
    /// move onto the same index).
    pub fn reorder(&mut self, id: &WidgetId, target_index: usize) -> bool {
        let Some(from) = self.position(id) else {
            log::debug!("Ignoring reorder of unknown widget {}", id);
            return false;
        };
        let to = target_index.min(self.entries.len() - 1);
        if to != target_index {
            log::debug!("Clamped reorder target {} to {}", target_index, to);
        }

        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        log::debug!("Reordered {} from {} to {}", id, from, to);
        self.commit();
        true
    }

    /// Delete `id` from the layout, returning its content.
    pub fn remove(&mut self, id: &WidgetId) -> Option<C> {
        let Some(at) = self.position(id) else {
            log::debug!("Ignoring removal of unknown widget {}", id);
            return None;
        };

        let entry = self.entries.remove(at);
        log::debug!("Removed {} from index {}", id, at);
        self.commit();
        Some(entry.content)
    }

    /// Add a widget at `index`, clamped to the end of the layout.
    ///
    /// Returns false if the id is already present.
    pub fn insert(&mut self, id: WidgetId, content: C, index: usize) -> bool {
        if self.contains(&id) {
            log::warn!("Refusing to insert duplicate widget {}", id);
            return false;
        }

        let at = index.min(self.entries.len());
        log::debug!("Inserted {} at index {}", id, at);
        self.entries.insert(at, WidgetEntry::new(id, at, content));
        self.commit();
        true
    }

    /// Toggle edit mode.
    ///
    /// Leaving edit mode cancels any live gesture before the flag flips.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        if self.edit_mode == enabled {
            return;
        }
        if !enabled {
            self.widgets.cancel_active();
        }

        self.edit_mode = enabled;
        self.widgets.sync(&self.entries, enabled);
        log::info!("Edit mode {}", if enabled { "on" } else { "off" });
    }

    /// Route one drag-primitive callback and apply what a completed drop asks for.
    ///
    /// Returns the dispatched request, if the event completed a gesture.
    pub fn handle_drag(&mut self, event: &DragEvent) -> Option<LayoutRequest> {
        let request = self.widgets.handle(event)?;
        match &request {
            LayoutRequest::Reorder { id, index } => {
                self.reorder(id, *index);
            }
            LayoutRequest::Remove { id } => {
                self.remove(id);
            }
        }
        Some(request)
    }

    /// Release the layout, handing back its entries.
    pub fn into_entries(self) -> Vec<WidgetEntry<C>> {
        self.entries
    }

    fn commit(&mut self) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.index = i;
        }
        self.widgets.sync(&self.entries, self.edit_mode);
        self.hook.persist(&self.entries);
    }
}
