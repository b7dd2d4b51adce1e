//! Registry of widget wrappers and the active gesture.

use std::collections::HashMap;
use crate::drag::{DragEvent, DropOutcome, DropTargets};
use crate::layout::{WidgetEntry, WidgetId};
use super::state::{DragPhase, GestureEnd};
use super::visuals::WidgetVisuals;
use super::wrapper::WidgetWrapper;

/// A layout mutation requested by a completed gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutRequest {
    Reorder { id: WidgetId, index: usize },
    Remove { id: WidgetId },
}

impl LayoutRequest {
    fn from_outcome(id: WidgetId, outcome: DropOutcome) -> Self {
        match outcome {
            DropOutcome::Reorder(index) => Self::Reorder { id, index },
            DropOutcome::Remove => Self::Remove { id },
        }
    }

    pub fn id(&self) -> &WidgetId {
        match self {
            Self::Reorder { id, .. } | Self::Remove { id } => id,
        }
    }
}

/// Holds one wrapper per layout entry and routes primitive callbacks.
///
/// At most one wrapper is dragging at any time. Events for other widgets
/// while a gesture is live, and events for unknown ids, are dropped.
#[derive(Debug, Clone, Default)]
pub struct WidgetManager {
    wrappers: HashMap<WidgetId, WidgetWrapper>,
    /// Source of the live gesture, if any.
    active: Option<WidgetId>,
    targets: DropTargets,
}

impl WidgetManager {
    pub fn new(targets: DropTargets) -> Self {
        Self {
            wrappers: HashMap::new(),
            active: None,
            targets,
        }
    }

    pub fn targets(&self) -> &DropTargets {
        &self.targets
    }

    pub fn wrapper(&self, id: &WidgetId) -> Option<&WidgetWrapper> {
        self.wrappers.get(id)
    }

    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }

    /// Source of the live gesture.
    pub fn active(&self) -> Option<&WidgetId> {
        self.active.as_ref()
    }

    pub fn phase(&self, id: &WidgetId) -> DragPhase {
        self.wrappers
            .get(id)
            .map(WidgetWrapper::phase)
            .unwrap_or_default()
    }

    pub fn visuals(&self, id: &WidgetId) -> WidgetVisuals {
        self.wrappers
            .get(id)
            .map(WidgetWrapper::visuals)
            .unwrap_or_default()
    }

    /// Bring the wrappers in line with the layout: one per entry, with
    /// fresh index and edit-mode values. Wrappers of removed widgets go away.
    pub fn sync<C>(&mut self, entries: &[WidgetEntry<C>], edit_mode: bool) {
        self.wrappers
            .retain(|id, _| entries.iter().any(|entry| entry.id() == id));
        if let Some(active) = &self.active {
            if !self.wrappers.contains_key(active) {
                self.active = None;
            }
        }

        for entry in entries {
            self.wrappers
                .entry(entry.id().clone())
                .and_modify(|wrapper| wrapper.observe(entry.index(), edit_mode))
                .or_insert_with(|| {
                    WidgetWrapper::new(entry.id().clone(), entry.index(), edit_mode)
                });
        }
    }

    /// Force the live gesture, if any, to end as cancelled.
    pub fn cancel_active(&mut self) -> Option<WidgetId> {
        let id = self.active.take()?;
        if let Some(wrapper) = self.wrappers.get_mut(&id) {
            wrapper.cancel();
        }
        log::info!("Cancelled in-flight drag of {}", id);
        Some(id)
    }

    /// Feed one primitive callback through the owning wrapper.
    ///
    /// Returns the layout mutation a completed drop asks for.
    pub fn handle(&mut self, event: &DragEvent) -> Option<LayoutRequest> {
        match event {
            DragEvent::Start { id } => {
                if let Some(active) = &self.active {
                    log::warn!("Ignoring drag start on {}: {} is already dragging", id, active);
                    return None;
                }
                let Some(wrapper) = self.wrappers.get_mut(id) else {
                    log::debug!("Ignoring drag start on unknown widget {}", id);
                    return None;
                };
                if wrapper.begin() {
                    self.active = Some(id.clone());
                }
                None
            }
            DragEvent::Move { id, over } => {
                if self.active.as_ref() == Some(id) {
                    if let Some(wrapper) = self.wrappers.get_mut(id) {
                        wrapper.track(over.as_ref(), &self.targets);
                    }
                }
                None
            }
            DragEvent::End { id, target } => {
                if self.active.as_ref() != Some(id) {
                    log::debug!("Ignoring drag end on {}: not the active gesture", id);
                    return None;
                }
                self.active = None;
                let wrapper = self.wrappers.get_mut(id)?;
                match wrapper.finish(target.as_ref(), &self.targets)? {
                    GestureEnd::Dropped(outcome) => {
                        Some(LayoutRequest::from_outcome(id.clone(), outcome))
                    }
                    GestureEnd::Cancelled => None,
                }
            }
            DragEvent::Cancel { id } => {
                if self.active.as_ref() == Some(id) {
                    self.cancel_active();
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::DropLocation;

    fn id(s: &str) -> WidgetId {
        WidgetId::new(s)
    }

    fn entries(ids: &[&str]) -> Vec<WidgetEntry<()>> {
        ids.iter()
            .enumerate()
            .map(|(i, s)| WidgetEntry::new(id(s), i, ()))
            .collect()
    }

    fn manager(ids: &[&str], edit_mode: bool) -> WidgetManager {
        let mut manager = WidgetManager::default();
        manager.sync(&entries(ids), edit_mode);
        manager
    }

    #[test]
    fn test_sync_tracks_entries() {
        let mut m = manager(&["a", "b", "c"], true);
        assert_eq!(m.len(), 3);
        assert_eq!(m.wrapper(&id("c")).unwrap().index(), 2);

        m.sync(&entries(&["c", "a"]), false);
        assert_eq!(m.len(), 2);
        assert!(m.wrapper(&id("b")).is_none());
        assert_eq!(m.wrapper(&id("c")).unwrap().index(), 0);
        assert!(!m.wrapper(&id("a")).unwrap().edit_mode());
    }

    #[test]
    fn test_single_active_gesture() {
        let mut m = manager(&["a", "b"], true);
        m.handle(&DragEvent::Start { id: id("a") });
        m.handle(&DragEvent::Start { id: id("b") });

        assert_eq!(m.active(), Some(&id("a")));
        assert_eq!(m.phase(&id("b")), DragPhase::Idle);
    }

    #[test]
    fn test_drop_yields_request() {
        let mut m = manager(&["a", "b"], true);
        m.handle(&DragEvent::Start { id: id("a") });
        let request = m.handle(&DragEvent::End {
            id: id("a"),
            target: Some(DropLocation::new("dashboard", 1)),
        });

        assert_eq!(request, Some(LayoutRequest::Reorder { id: id("a"), index: 1 }));
        assert_eq!(m.active(), None);
        assert_eq!(m.phase(&id("a")), DragPhase::Idle);
    }

    #[test]
    fn test_move_over_catalog_then_drop() {
        let mut m = manager(&["a", "b"], true);
        m.handle(&DragEvent::Start { id: id("b") });
        m.handle(&DragEvent::Move {
            id: id("b"),
            over: Some(DropLocation::new("catalog", 0)),
        });
        assert!(m.visuals(&id("b")).remove_zone_highlight);

        let request = m.handle(&DragEvent::End {
            id: id("b"),
            target: Some(DropLocation::new("catalog", 0)),
        });
        assert_eq!(request, Some(LayoutRequest::Remove { id: id("b") }));
    }

    #[test]
    fn test_events_for_inactive_widgets_ignored() {
        let mut m = manager(&["a", "b"], true);
        m.handle(&DragEvent::Start { id: id("a") });

        let request = m.handle(&DragEvent::End {
            id: id("b"),
            target: Some(DropLocation::new("dashboard", 0)),
        });
        assert_eq!(request, None);
        m.handle(&DragEvent::Cancel { id: id("b") });
        assert_eq!(m.active(), Some(&id("a")));
    }

    #[test]
    fn test_start_ignored_outside_edit_mode() {
        let mut m = manager(&["a"], false);
        m.handle(&DragEvent::Start { id: id("a") });
        assert_eq!(m.active(), None);
        assert_eq!(m.visuals(&id("a")), WidgetVisuals::pass_through());
    }

    #[test]
    fn test_cancel_active() {
        let mut m = manager(&["a"], true);
        assert_eq!(m.cancel_active(), None);

        m.handle(&DragEvent::Start { id: id("a") });
        assert_eq!(m.cancel_active(), Some(id("a")));
        assert_eq!(m.phase(&id("a")), DragPhase::Idle);
        assert_eq!(m.active(), None);
    }

    #[test]
    fn test_sync_drops_active_when_widget_removed() {
        let mut m = manager(&["a", "b"], true);
        m.handle(&DragEvent::Start { id: id("a") });
        m.sync(&entries(&["b"]), true);
        assert_eq!(m.active(), None);

        m.handle(&DragEvent::Start { id: id("b") });
        assert_eq!(m.active(), Some(&id("b")));
    }
}
