//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the common implementation details
//! for all widgets. It handles geometry, visibility, visual state and
//! repaint requests, and coordinates with the object system.

use modebutton_core::{ObjectBase, ObjectId, ObjectResult};
use modebutton_render::{Point, Rect, Size};

use crate::style::VisualState;

/// The base implementation for all widgets.
///
/// Widget implementations include this as a field and delegate common
/// operations to it.
///
/// # Example
///
/// ```ignore
/// use modebutton::widget::{PaintContext, SizeHint, Widget, WidgetBase};
///
/// struct Swatch {
///     base: WidgetBase,
/// }
///
/// impl Widget for Swatch {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///
///     fn size_hint(&self) -> SizeHint {
///         SizeHint::from_dimensions(24.0, 24.0)
///     }
///
///     fn paint(&self, ctx: &mut PaintContext<'_>) {
///         // ...
///     }
/// }
/// ```
pub struct WidgetBase {
    object_base: ObjectBase,

    /// Position relative to the parent, and size.
    geometry: Rect,

    visible: bool,

    /// State the widget paints itself in.
    visual_state: VisualState,

    needs_repaint: bool,

    /// Number of `update()` calls since creation.
    repaint_requests: u64,
}

impl WidgetBase {
    /// Create a new widget base registered under type `T`.
    pub fn new<T: 'static>() -> Self {
        Self {
            object_base: ObjectBase::new::<T>(),
            geometry: Rect::ZERO,
            visible: true,
            visual_state: VisualState::Normal,
            needs_repaint: true,
            repaint_requests: 0,
        }
    }

    // =========================================================================
    // Object
    // =========================================================================

    /// The widget's object ID.
    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.object_base.id()
    }

    /// The widget's object name.
    pub fn name(&self) -> String {
        self.object_base.name()
    }

    /// Set the widget's object name.
    pub fn set_name(&self, name: impl Into<String>) {
        self.object_base.set_name(name);
    }

    /// The parent widget's ID, if any.
    pub fn parent_id(&self) -> Option<ObjectId> {
        self.object_base.parent()
    }

    /// Reparent the widget in the object registry.
    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        self.object_base.set_parent(parent)
    }

    /// IDs of child widgets, in insertion order.
    pub fn children_ids(&self) -> Vec<ObjectId> {
        self.object_base.children()
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry, requesting a repaint if it changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.update();
        }
    }

    /// Get the widget's position relative to its parent.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.geometry.size.width
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.geometry.size.height
    }

    /// The widget's local coordinate space, always at (0, 0).
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_size(self.geometry.size)
    }

    /// Whether a local point is inside the widget.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    // =========================================================================
    // Visibility and visual state
    // =========================================================================

    /// Whether the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the widget.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.update();
        }
    }

    /// The state the widget paints itself in.
    #[inline]
    pub fn visual_state(&self) -> VisualState {
        self.visual_state
    }

    /// Change the visual state, requesting a repaint if it changed.
    pub fn set_visual_state(&mut self, state: VisualState) {
        if self.visual_state != state {
            self.visual_state = state;
            self.update();
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the widget.
    ///
    /// This only marks the widget dirty; the host decides when to paint.
    pub fn update(&mut self) {
        self.needs_repaint = true;
        self.repaint_requests += 1;
    }

    /// Number of repaint requests made so far.
    #[inline]
    pub fn repaint_requests(&self) -> u64 {
        self.repaint_requests
    }

    /// Clear the repaint flag (called after painting).
    pub(crate) fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }
}

static_assertions::assert_impl_all!(WidgetBase: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;

    #[test]
    fn test_geometry_change_requests_repaint() {
        let mut base = WidgetBase::new::<Dummy>();
        let before = base.repaint_requests();

        base.set_geometry(Rect::new(10.0, 5.0, 100.0, 30.0));
        assert_eq!(base.repaint_requests(), before + 1);
        assert_eq!(base.pos(), Point::new(10.0, 5.0));
        assert_eq!(base.rect(), Rect::new(0.0, 0.0, 100.0, 30.0));

        base.set_geometry(Rect::new(10.0, 5.0, 100.0, 30.0));
        assert_eq!(base.repaint_requests(), before + 1);
    }

    #[test]
    fn test_visual_state_is_guarded() {
        let mut base = WidgetBase::new::<Dummy>();
        base.clear_repaint_flag();

        base.set_visual_state(VisualState::Normal);
        assert!(!base.needs_repaint());

        base.set_visual_state(VisualState::Selected);
        assert!(base.needs_repaint());
        assert_eq!(base.visual_state(), VisualState::Selected);
    }

    #[test]
    fn test_parenting_goes_through_registry() {
        let parent = WidgetBase::new::<Dummy>();
        let child = WidgetBase::new::<Dummy>();

        child.set_parent(Some(parent.object_id())).unwrap();
        assert_eq!(child.parent_id(), Some(parent.object_id()));
        assert_eq!(parent.children_ids(), vec![child.object_id()]);

        child.set_parent(None).unwrap();
        assert!(parent.children_ids().is_empty());
    }
}
