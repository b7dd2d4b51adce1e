//! Widget interaction layer.
//!
//! Each dashboard widget is wrapped with transient drag state:
//! - A per-widget state machine (idle, dragging, dropped, cancelled)
//! - Visual affordances derived from that state and the edit-mode flag
//! - A registry that routes drag-primitive callbacks to the right wrapper
//!
//! Widget content stays opaque. Wrappers only request layout changes.

mod manager;
mod state;
mod visuals;
mod wrapper;

pub use manager::{LayoutRequest, WidgetManager};
pub use state::{DragPhase, DragSession, GestureEnd};
pub use visuals::{
    WidgetVisuals, EDIT_BORDER_COLOR, LIFT_OPACITY, LIFT_ROTATION_DEG, LIFT_SCALE,
    REMOVE_HINT_COLOR, REMOVE_HINT_TEXT, REMOVE_ZONE_COLOR, REMOVE_ZONE_TEXT,
};
pub use wrapper::WidgetWrapper;
