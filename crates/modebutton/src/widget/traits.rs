//! The `Widget` trait and the paint context handed to it.

use modebutton_core::Object;
use modebutton_render::{Point, Rect, Renderer, Size};

use super::base::WidgetBase;
use super::events::{ResizeEvent, WidgetEvent};
use super::geometry::SizeHint;
use crate::style::{StyleProvider, VisualState};

/// Everything a widget needs while painting.
///
/// The renderer is already translated so that (0, 0) is the widget's
/// top-left corner, and clipped to the widget's bounds.
pub struct PaintContext<'a> {
    renderer: &'a mut dyn Renderer,
    style: &'a dyn StyleProvider,
    /// The widget's local rectangle (origin always 0,0).
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, style: &'a dyn StyleProvider, widget_rect: Rect) -> Self {
        Self {
            renderer,
            style,
            widget_rect,
        }
    }

    /// Get the renderer.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        &mut *self.renderer
    }

    /// Get the style provider.
    #[inline]
    pub fn style(&self) -> &'a dyn StyleProvider {
        self.style
    }

    /// The widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// The widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    /// The widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    /// Paint a child widget at its geometry, clipped to its bounds.
    ///
    /// Hidden children are skipped.
    pub fn paint_child(&mut self, child: &dyn Widget) {
        if !child.is_visible() || child.rect().is_empty() {
            return;
        }
        let pos = child.pos();
        self.renderer.save();
        self.renderer.translate(pos.x, pos.y);
        self.renderer.clip_rect(child.rect());
        let mut ctx = PaintContext::new(&mut *self.renderer, self.style, child.rect());
        child.paint(&mut ctx);
        self.renderer.restore();
    }
}

/// The core trait for all widgets.
///
/// Implementors embed a [`WidgetBase`] and expose it through
/// [`widget_base`](Widget::widget_base); everything else has a default that
/// delegates to it.
pub trait Widget: Object + Send + Sync {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Get the widget's size hint for layout purposes.
    fn size_hint(&self) -> SizeHint;

    /// Paint the widget.
    ///
    /// The renderer is already translated so that (0, 0) is the top-left
    /// corner of the widget. Use `ctx.rect()` to get the full bounds.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    // =========================================================================
    // Events
    // =========================================================================

    /// Handle an event. Returns `true` if the widget handled it.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    // =========================================================================
    // Geometry (default implementations delegate to WidgetBase)
    // =========================================================================

    /// Get the widget's geometry (position and size).
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    ///
    /// A size change is delivered to the widget as a resize event.
    fn set_geometry(&mut self, rect: Rect) {
        let old_size = self.size();
        self.widget_base_mut().set_geometry(rect);
        if old_size != rect.size {
            let mut event = WidgetEvent::Resize(ResizeEvent::new(old_size, rect.size));
            self.event(&mut event);
        }
    }

    /// Get the widget's position relative to its parent.
    fn pos(&self) -> Point {
        self.widget_base().pos()
    }

    /// Get the widget's size.
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Get the widget's local rectangle (origin at 0,0).
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    /// Get the widget's width.
    fn width(&self) -> f32 {
        self.widget_base().width()
    }

    /// Get the widget's height.
    fn height(&self) -> f32 {
        self.widget_base().height()
    }

    // =========================================================================
    // Visibility and state
    // =========================================================================

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Set whether the widget is visible.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// The state the widget paints itself in.
    fn visual_state(&self) -> VisualState {
        self.widget_base().visual_state()
    }

    /// Change the state the widget paints itself in.
    fn set_visual_state(&mut self, state: VisualState) {
        self.widget_base_mut().set_visual_state(state);
    }

    /// Request a repaint.
    fn update(&mut self) {
        self.widget_base_mut().update();
    }
}
