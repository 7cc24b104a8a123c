//! Label widget for text display.
//!
//! Labels are the usual content of a mode button segment. Text is measured
//! with a fixed per-character advance so layout stays deterministic without
//! a font system, and painted centered in the label's bounds using the
//! style's text color for the label's current visual state.
//!
//! # Example
//!
//! ```
//! use modebutton::widget::widgets::Label;
//! use modebutton::widget::Widget;
//!
//! let label = Label::new("Week");
//! assert_eq!(label.text(), "Week");
//! assert!(label.size_hint().preferred.width > 0.0);
//! ```

use modebutton_core::{Object, ObjectId};
use modebutton_render::Point;

use crate::widget::{PaintContext, SizeHint, Widget, WidgetBase};

/// Horizontal advance of one character.
pub const CHAR_WIDTH: f32 = 7.0;

/// Height of one line of text.
pub const LINE_HEIGHT: f32 = 16.0;

/// A widget that displays a single line of text.
pub struct Label {
    base: WidgetBase,
    text: String,
}

impl Label {
    /// Create a label showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new::<Self>(),
            text: text.into(),
        }
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the displayed text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text;
            self.base.update();
        }
    }

    fn text_width(&self) -> f32 {
        self.text.chars().count() as f32 * CHAR_WIDTH
    }
}

impl Object for Label {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for Label {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::from_dimensions(self.text_width(), LINE_HEIGHT)
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        if self.text.is_empty() {
            return;
        }
        let color = ctx.style().text_color(self.visual_state());
        let origin = Point::new(
            ((ctx.width() - self.text_width()) / 2.0).max(0.0),
            ((ctx.height() - LINE_HEIGHT) / 2.0).max(0.0),
        );
        ctx.renderer().draw_text(origin, &self.text, color);
    }
}

static_assertions::assert_impl_all!(Label: Send, Sync);
