//! Drag-primitive contract.
//!
//! The engine does not track pointers itself. A drag-and-drop primitive
//! reports each gesture as `Start`, zero or more `Move`, then exactly one
//! `End` or `Cancel`, and guarantees at most one gesture at a time.

use crate::layout::WidgetId;
use serde::{Deserialize, Serialize};

/// Default identifier of the reorder surface.
pub const DEFAULT_BOARD_DROPPABLE: &str = "dashboard";
/// Default identifier of the removal target (the widget catalog).
pub const DEFAULT_REMOVAL_DROPPABLE: &str = "catalog";

/// Where the primitive reports the pointer to be: a droppable plus a slot index in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropLocation {
    pub droppable: String,
    pub index: usize,
}

impl DropLocation {
    pub fn new(droppable: impl Into<String>, index: usize) -> Self {
        Self {
            droppable: droppable.into(),
            index,
        }
    }
}

/// One callback from the drag primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragEvent {
    /// A gesture started on widget `id`.
    Start { id: WidgetId },
    /// The pointer moved; `over` is the current drop target, if any.
    Move {
        id: WidgetId,
        #[serde(default)]
        over: Option<DropLocation>,
    },
    /// The gesture was released; `target` is `None` outside every droppable.
    End {
        id: WidgetId,
        #[serde(default)]
        target: Option<DropLocation>,
    },
    /// The primitive aborted the gesture.
    Cancel { id: WidgetId },
}

impl DragEvent {
    /// The widget this event is about.
    pub fn source(&self) -> &WidgetId {
        match self {
            Self::Start { id }
            | Self::Move { id, .. }
            | Self::End { id, .. }
            | Self::Cancel { id } => id,
        }
    }
}

/// What a drop location means to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// A slot on the reorder surface.
    Board(usize),
    /// The designated removal target.
    Removal,
    /// Any other droppable.
    Foreign,
}

/// Resolved result of one completed gesture.
///
/// Exactly one layout operation is dispatched per `DropOutcome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Reorder(usize),
    Remove,
}

/// Identifiers of the two droppables the engine cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTargets {
    pub board: String,
    pub removal: String,
}

impl Default for DropTargets {
    fn default() -> Self {
        Self {
            board: DEFAULT_BOARD_DROPPABLE.to_string(),
            removal: DEFAULT_REMOVAL_DROPPABLE.to_string(),
        }
    }
}

impl DropTargets {
    pub fn new(board: impl Into<String>, removal: impl Into<String>) -> Self {
        Self {
            board: board.into(),
            removal: removal.into(),
        }
    }

    /// Classify a location reported by the primitive.
    pub fn classify(&self, location: &DropLocation) -> DropTarget {
        if location.droppable == self.removal {
            DropTarget::Removal
        } else if location.droppable == self.board {
            DropTarget::Board(location.index)
        } else {
            DropTarget::Foreign
        }
    }

    /// Whether `location` is the removal target.
    pub fn is_removal(&self, location: Option<&DropLocation>) -> bool {
        location.is_some_and(|loc| loc.droppable == self.removal)
    }

    /// Resolve a final drop location into an outcome.
    /// `None` means the gesture ends as cancelled.
    pub fn resolve(&self, target: Option<&DropLocation>) -> Option<DropOutcome> {
        match self.classify(target?) {
            DropTarget::Board(index) => Some(DropOutcome::Reorder(index)),
            DropTarget::Removal => Some(DropOutcome::Remove),
            DropTarget::Foreign => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_targets() {
        let targets = DropTargets::default();

        assert_eq!(
            targets.classify(&DropLocation::new("dashboard", 3)),
            DropTarget::Board(3)
        );
        assert_eq!(
            targets.classify(&DropLocation::new("catalog", 0)),
            DropTarget::Removal
        );
        assert_eq!(
            targets.classify(&DropLocation::new("sidebar", 1)),
            DropTarget::Foreign
        );
    }

    #[test]
    fn test_resolve_outcome() {
        let targets = DropTargets::default();

        assert_eq!(
            targets.resolve(Some(&DropLocation::new("dashboard", 2))),
            Some(DropOutcome::Reorder(2))
        );
        assert_eq!(
            targets.resolve(Some(&DropLocation::new("catalog", 5))),
            Some(DropOutcome::Remove)
        );
        assert_eq!(targets.resolve(None), None);
        assert_eq!(targets.resolve(Some(&DropLocation::new("elsewhere", 0))), None);
    }

    #[test]
    fn test_custom_target_names() {
        let targets = DropTargets::new("grid", "trash");
        assert!(targets.is_removal(Some(&DropLocation::new("trash", 0))));
        assert!(!targets.is_removal(Some(&DropLocation::new("catalog", 0))));
        assert!(!targets.is_removal(None));
    }

    #[test]
    fn test_event_json_shape() {
        let event: DragEvent = serde_json::from_str(
            r#"{"type":"end","id":"stats-1","target":{"droppable":"catalog","index":0}}"#,
        )
        .unwrap();

        assert_eq!(event.source().as_str(), "stats-1");
        assert!(matches!(event, DragEvent::End { target: Some(_), .. }));

        let event: DragEvent = serde_json::from_str(r#"{"type":"move","id":"a"}"#).unwrap();
        assert_eq!(
            event,
            DragEvent::Move {
                id: WidgetId::new("a"),
                over: None
            }
        );
    }
}
