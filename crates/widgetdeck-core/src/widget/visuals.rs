//! Visual affordances of a wrapped widget.

use kurbo::{Affine, Rect};
use peniko::Color;

/// Rotation applied to a widget while it is lifted, in degrees.
pub const LIFT_ROTATION_DEG: f64 = 2.0;
/// Scale applied to a widget while it is lifted.
pub const LIFT_SCALE: f64 = 1.05;
/// Opacity of a lifted widget.
pub const LIFT_OPACITY: f32 = 0.8;

/// Dashed edit-mode border and drag handle tint.
pub const EDIT_BORDER_COLOR: Color = Color::from_rgba8(0, 73, 150, 255);
/// Background of the "drag to catalog to remove" hint.
pub const REMOVE_HINT_COLOR: Color = Color::from_rgba8(211, 47, 47, 230);
/// Outline of the removal target while a widget hovers it.
pub const REMOVE_ZONE_COLOR: Color = Color::from_rgba8(211, 47, 47, 255);

/// Label shown on a widget while it is dragged.
pub const REMOVE_HINT_TEXT: &str = "Drag to catalog to remove";
/// Label shown on the removal target while it is hovered.
pub const REMOVE_ZONE_TEXT: &str = "Drop to remove";

/// What the view layer should draw around a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetVisuals {
    /// Dashed border marking the widget as editable.
    pub edit_border: bool,
    /// Grab handle in the top-left corner.
    pub drag_handle: bool,
    /// "Drag to catalog to remove" hint.
    pub remove_hint: bool,
    /// Rotated, scaled and faded while dragging.
    pub lifted: bool,
    /// The widget currently hovers the removal target.
    pub remove_zone_highlight: bool,
}

impl WidgetVisuals {
    /// Edit mode is off: the widget renders as plain content.
    pub fn pass_through() -> Self {
        Self::default()
    }

    /// Edit mode, not dragging.
    pub fn editing() -> Self {
        Self {
            edit_border: true,
            drag_handle: true,
            ..Self::default()
        }
    }

    /// Edit mode, this widget is the drag source.
    pub fn dragging(over_remove_zone: bool) -> Self {
        Self {
            edit_border: true,
            drag_handle: true,
            remove_hint: true,
            lifted: true,
            remove_zone_highlight: over_remove_zone,
        }
    }

    /// Transform to apply to the widget's content, about the centre of `bounds`.
    pub fn transform(&self, bounds: Rect) -> Affine {
        if !self.lifted {
            return Affine::IDENTITY;
        }
        let center = bounds.center().to_vec2();
        Affine::translate(center)
            * Affine::scale(LIFT_SCALE)
            * Affine::rotate(LIFT_ROTATION_DEG.to_radians())
            * Affine::translate(-center)
    }

    pub fn opacity(&self) -> f32 {
        if self.lifted { LIFT_OPACITY } else { 1.0 }
    }

    /// Colour of the dashed edit-mode border, if one is drawn.
    pub fn border_color(&self) -> Option<Color> {
        self.edit_border.then_some(EDIT_BORDER_COLOR)
    }

    /// Background and label of the removal hint, while dragging.
    pub fn hint(&self) -> Option<(Color, &'static str)> {
        self.remove_hint.then_some((REMOVE_HINT_COLOR, REMOVE_HINT_TEXT))
    }

    /// Outline and label for the removal target while this widget hovers it.
    pub fn remove_zone(&self) -> Option<(Color, &'static str)> {
        self.remove_zone_highlight
            .then_some((REMOVE_ZONE_COLOR, REMOVE_ZONE_TEXT))
    }
}
