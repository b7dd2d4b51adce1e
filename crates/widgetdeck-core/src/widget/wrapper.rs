//! Per-widget drag state machine.

use crate::drag::{DropLocation, DropTargets};
use crate::layout::WidgetId;
use super::state::{DragPhase, DragSession, GestureEnd};
use super::visuals::WidgetVisuals;

/// Wraps one dashboard widget with its transient drag state.
///
/// The wrapper only reads its index and the edit-mode flag; it never
/// touches the layout. A completed gesture is reported back as a
/// [`GestureEnd`] for the owner to act on.
#[derive(Debug, Clone)]
pub struct WidgetWrapper {
    id: WidgetId,
    index: usize,
    edit_mode: bool,
    session: Option<DragSession>,
}

impl WidgetWrapper {
    pub fn new(id: WidgetId, index: usize, edit_mode: bool) -> Self {
        Self {
            id,
            index,
            edit_mode,
            session: None,
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// Position of the widget in the layout, as last observed.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Refresh the values handed down by the layout.
    pub(crate) fn observe(&mut self, index: usize, edit_mode: bool) {
        self.index = index;
        self.edit_mode = edit_mode;
    }

    pub fn phase(&self) -> DragPhase {
        self.session
            .as_ref()
            .map(|session| session.phase)
            .unwrap_or_default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.phase().is_dragging()
    }

    pub fn over_remove_zone(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.over_remove_zone)
    }

    /// Handle a drag start. Returns false when the start is rejected.
    pub fn begin(&mut self) -> bool {
        if !self.edit_mode {
            log::debug!("Ignoring drag start on {}: edit mode is off", self.id);
            return false;
        }
        if self.phase() != DragPhase::Idle {
            log::warn!("Ignoring re-entrant drag start on {}", self.id);
            return false;
        }

        log::debug!("Drag start: {} at index {}", self.id, self.index);
        self.session = Some(DragSession::start(self.id.clone(), self.index));
        true
    }

    /// Handle a pointer move while dragging.
    pub fn track(&mut self, over: Option<&DropLocation>, targets: &DropTargets) {
        if let Some(session) = self.session.as_mut() {
            session.over_remove_zone = targets.is_removal(over);
        }
    }

    /// Handle the release of the gesture.
    ///
    /// Returns `None` if this widget was not dragging. Otherwise the
    /// session ends here and the wrapper is back to idle.
    pub fn finish(
        &mut self,
        target: Option<&DropLocation>,
        targets: &DropTargets,
    ) -> Option<GestureEnd> {
        let mut session = self.session.take()?;
        session.over_remove_zone = targets.is_removal(target);

        let end = match targets.resolve(target) {
            Some(outcome) => GestureEnd::Dropped(outcome),
            None => GestureEnd::Cancelled,
        };
        session.phase = end.phase();

        log::debug!(
            "Drag end: {} {:?} as {:?} (from index {}, over remove zone: {})",
            session.source_id,
            session.phase,
            end.outcome(),
            session.origin_index,
            session.over_remove_zone
        );
        Some(end)
    }

    /// Abort the gesture without touching the layout.
    pub fn cancel(&mut self) -> Option<GestureEnd> {
        let mut session = self.session.take()?;
        session.phase = DragPhase::Cancelled;
        log::debug!("Drag cancelled: {}", session.source_id);
        Some(GestureEnd::Cancelled)
    }

    /// Render-facing snapshot of this widget's affordances.
    pub fn visuals(&self) -> WidgetVisuals {
        if !self.edit_mode {
            return WidgetVisuals::pass_through();
        }
        match &self.session {
            Some(session) => WidgetVisuals::dragging(session.over_remove_zone),
            None => WidgetVisuals::editing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::DropOutcome;

    fn wrapper(edit_mode: bool) -> WidgetWrapper {
        WidgetWrapper::new(WidgetId::new("a"), 1, edit_mode)
    }

    #[test]
    fn test_begin_requires_edit_mode() {
        let mut w = wrapper(false);
        assert!(!w.begin());
        assert_eq!(w.phase(), DragPhase::Idle);

        w.observe(1, true);
        assert!(w.begin());
        assert_eq!(w.phase(), DragPhase::Dragging);
    }

    #[test]
    fn test_reentrant_begin_rejected() {
        let mut w = wrapper(true);
        assert!(w.begin());
        assert!(!w.begin());
        assert_eq!(w.session().unwrap().origin_index, 1);
    }

    #[test]
    fn test_track_remove_zone() {
        let targets = DropTargets::default();
        let mut w = wrapper(true);
        w.begin();

        w.track(Some(&DropLocation::new("catalog", 0)), &targets);
        assert!(w.over_remove_zone());
        assert!(w.visuals().remove_zone_highlight);

        w.track(Some(&DropLocation::new("dashboard", 0)), &targets);
        assert!(!w.over_remove_zone());

        w.track(None, &targets);
        assert!(!w.over_remove_zone());
    }

    #[test]
    fn test_track_ignored_when_idle() {
        let targets = DropTargets::default();
        let mut w = wrapper(true);
        w.track(Some(&DropLocation::new("catalog", 0)), &targets);
        assert!(!w.over_remove_zone());
        assert_eq!(w.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_finish_on_board_reorders() {
        let targets = DropTargets::default();
        let mut w = wrapper(true);
        w.begin();

        let end = w.finish(Some(&DropLocation::new("dashboard", 3)), &targets);
        assert_eq!(end, Some(GestureEnd::Dropped(DropOutcome::Reorder(3))));
        assert_eq!(w.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_finish_on_removal_target_removes() {
        let targets = DropTargets::default();
        let mut w = wrapper(true);
        w.begin();
        w.track(Some(&DropLocation::new("dashboard", 0)), &targets);

        let end = w.finish(Some(&DropLocation::new("catalog", 2)), &targets);
        assert_eq!(end, Some(GestureEnd::Dropped(DropOutcome::Remove)));
        assert_eq!(end.unwrap().phase(), DragPhase::Dropped);
        assert!(end.unwrap().phase().is_terminal());
    }

    #[test]
    fn test_drop_target_wins_over_hovered_removal_zone() {
        let targets = DropTargets::default();
        let mut w = wrapper(true);
        w.begin();
        w.track(Some(&DropLocation::new("catalog", 0)), &targets);
        assert!(w.over_remove_zone());

        let end = w.finish(Some(&DropLocation::new("dashboard", 2)), &targets);
        assert_eq!(end, Some(GestureEnd::Dropped(DropOutcome::Reorder(2))));
        assert!(!w.over_remove_zone());
    }

    #[test]
    fn test_finish_outside_targets_cancels() {
        let targets = DropTargets::default();
        let mut w = wrapper(true);
        w.begin();
        let end = w.finish(None, &targets);
        assert_eq!(end, Some(GestureEnd::Cancelled));
        assert!(end.unwrap().phase().is_terminal());
        assert!(!w.phase().is_terminal());

        w.begin();
        let end = w.finish(Some(&DropLocation::new("sidebar", 0)), &targets);
        assert_eq!(end, Some(GestureEnd::Cancelled));
        assert_eq!(w.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_finish_without_session_is_ignored() {
        let targets = DropTargets::default();
        let mut w = wrapper(true);
        let target = DropLocation::new("dashboard", 0);
        assert_eq!(w.finish(Some(&target), &targets), None);
        assert_eq!(w.cancel(), None);
    }

    #[test]
    fn test_visuals_follow_phase() {
        let mut w = wrapper(false);
        assert_eq!(w.visuals(), WidgetVisuals::pass_through());

        w.observe(1, true);
        let idle = w.visuals();
        assert!(idle.edit_border);
        assert!(!idle.remove_hint);

        w.begin();
        let dragging = w.visuals();
        assert!(dragging.remove_hint);
        assert!(dragging.lifted);

        w.cancel();
        assert_eq!(w.visuals(), idle);
    }
}
