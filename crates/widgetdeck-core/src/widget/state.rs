//! Drag state definitions.

use crate::drag::DropOutcome;
use crate::layout::WidgetId;

/// Phase of a widget's drag lifecycle.
///
/// `Dropped` and `Cancelled` are terminal: a wrapper passes through them
/// and is back at `Idle` before its handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No gesture on this widget.
    #[default]
    Idle,
    /// This widget is the active drag source.
    Dragging,
    /// Released on a valid target; one layout operation is dispatched.
    Dropped,
    /// Aborted; the layout is left untouched.
    Cancelled,
}

impl DragPhase {
    /// Check if the widget is mid-gesture.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging)
    }

    /// Check if this phase ends a gesture.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Dropped | Self::Cancelled)
    }
}

/// Transient state of one gesture. Lives from drag start to drop or cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub source_id: WidgetId,
    pub phase: DragPhase,
    /// True while the current target is the removal target.
    pub over_remove_zone: bool,
    /// Index of the source when the gesture started.
    pub origin_index: usize,
}

impl DragSession {
    pub fn start(source_id: WidgetId, origin_index: usize) -> Self {
        Self {
            source_id,
            phase: DragPhase::Dragging,
            over_remove_zone: false,
            origin_index,
        }
    }
}

/// How a gesture ended, as observed by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEnd {
    Dropped(DropOutcome),
    Cancelled,
}

impl GestureEnd {
    /// The terminal phase the session passed through.
    pub fn phase(&self) -> DragPhase {
        match self {
            Self::Dropped(_) => DragPhase::Dropped,
            Self::Cancelled => DragPhase::Cancelled,
        }
    }

    pub fn outcome(&self) -> Option<DropOutcome> {
        match self {
            Self::Dropped(outcome) => Some(*outcome),
            Self::Cancelled => None,
        }
    }
}
