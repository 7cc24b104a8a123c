//! Push button widget implementation.
//!
//! A [`PushButton`] is a raised box around a single content widget (a
//! [`Label`] by default). A mode button can take a push button apart with
//! [`ModeButton::append_button`](super::ModeButton::append_button), keeping
//! only its content as the new segment.
//!
//! # Example
//!
//! ```
//! use modebutton::widget::widgets::PushButton;
//!
//! let button = PushButton::new("Remove");
//! button.clicked.connect(|_| println!("clicked"));
//! ```

use modebutton_core::logging::targets;
use modebutton_core::{Object, ObjectId, Signal};

use super::Label;
use crate::style::{paint_box, ShadowType, VisualState};
use crate::widget::{MouseButton, PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent};

/// Gap between the button frame and its content.
const CONTENT_MARGIN: f32 = 4.0;

/// A clickable button holding one content widget.
///
/// # Signals
///
/// - `pressed`: the primary button went down over the button
/// - `released`: the primary button came back up after a press
/// - `clicked`: a press and release both happened inside the button
pub struct PushButton {
    base: WidgetBase,
    content: Option<Box<dyn Widget>>,
    is_down: bool,

    /// Emitted on primary button press.
    pub pressed: Signal<()>,
    /// Emitted on primary button release.
    pub released: Signal<()>,
    /// Emitted when a press and release complete inside the button.
    pub clicked: Signal<()>,
}

impl PushButton {
    /// Create a button whose content is a [`Label`] showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_content(Box::new(Label::new(text)))
    }

    /// Create a button around an arbitrary content widget.
    pub fn with_content(content: Box<dyn Widget>) -> Self {
        let mut button = Self::empty();
        button.set_content(content);
        button
    }

    /// Create a button with no content.
    pub fn empty() -> Self {
        Self {
            base: WidgetBase::new::<Self>(),
            content: None,
            is_down: false,
            pressed: Signal::new(),
            released: Signal::new(),
            clicked: Signal::new(),
        }
    }

    /// The content widget, if any.
    pub fn content(&self) -> Option<&dyn Widget> {
        self.content.as_deref()
    }

    /// Replace the content widget, returning the previous one detached.
    pub fn set_content(&mut self, content: Box<dyn Widget>) -> Option<Box<dyn Widget>> {
        let previous = self.take_content();
        if let Err(err) = content.widget_base().set_parent(Some(self.base.object_id())) {
            tracing::warn!(target: targets::MODE_BUTTON, %err, "failed to parent button content");
        }
        self.content = Some(content);
        self.layout_content();
        self.base.update();
        previous
    }

    /// Detach and return the content widget.
    pub fn take_content(&mut self) -> Option<Box<dyn Widget>> {
        let content = self.content.take()?;
        if let Err(err) = content.widget_base().set_parent(None) {
            tracing::warn!(target: targets::MODE_BUTTON, %err, "failed to detach button content");
        }
        self.base.update();
        Some(content)
    }

    /// Whether the primary button is currently held on this button.
    pub fn is_down(&self) -> bool {
        self.is_down
    }

    fn layout_content(&mut self) {
        let inner = self.base.rect().deflate(CONTENT_MARGIN);
        if let Some(content) = self.content.as_mut() {
            content.set_geometry(inner);
        }
    }
}

impl Object for PushButton {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for PushButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let content = self
            .content
            .as_ref()
            .map(|c| c.size_hint().preferred)
            .unwrap_or_default();
        SizeHint::from_dimensions(
            content.width + CONTENT_MARGIN * 2.0,
            content.height + CONTENT_MARGIN * 2.0,
        )
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let state = if self.is_down {
            VisualState::Prelight
        } else {
            self.visual_state()
        };
        let shadow = if self.is_down {
            ShadowType::In
        } else {
            ShadowType::Out
        };
        let style = ctx.style().box_style(state);
        let rect = ctx.rect();
        paint_box(ctx.renderer(), &style, shadow, rect, None);

        if let Some(content) = self.content.as_deref() {
            ctx.paint_child(content);
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::Resize(_) => self.layout_content(),
            WidgetEvent::MousePress(e) if e.button == MouseButton::Left => {
                self.is_down = true;
                self.base.update();
                self.pressed.emit(());
                e.base.accept();
            }
            WidgetEvent::MouseRelease(e) if e.button == MouseButton::Left && self.is_down => {
                self.is_down = false;
                self.base.update();
                self.released.emit(());
                if self.base.contains_point(e.local_pos) {
                    self.clicked.emit(());
                }
                e.base.accept();
            }
            _ => {}
        }
        event.is_accepted()
    }
}

static_assertions::assert_impl_all!(PushButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{MousePressEvent, MouseReleaseEvent};
    use modebutton_render::{Point, Rect};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_take_content_detaches() {
        let mut button = PushButton::new("Day");
        let button_id = button.object_id();
        let content_id = button.content().map(|c| c.object_id()).unwrap();
        assert_eq!(button.widget_base().children_ids(), vec![content_id]);

        let content = button.take_content().unwrap();
        assert_eq!(content.object_id(), content_id);
        assert_eq!(content.widget_base().parent_id(), None);
        assert!(button.content().is_none());
        assert!(button.take_content().is_none());
        assert_ne!(button_id, content_id);
    }

    #[test]
    fn test_click_requires_release_inside() {
        let mut button = PushButton::new("Go");
        button.set_geometry(Rect::new(0.0, 0.0, 60.0, 24.0));

        let clicks = Arc::new(AtomicUsize::new(0));
        let clicks_clone = clicks.clone();
        button.clicked.connect(move |_| {
            clicks_clone.fetch_add(1, Ordering::SeqCst);
        });

        let press = |b: &mut PushButton| {
            b.event(&mut WidgetEvent::MousePress(MousePressEvent::new(
                MouseButton::Left,
                Point::new(5.0, 5.0),
            )))
        };
        let release = |b: &mut PushButton, x: f32| {
            b.event(&mut WidgetEvent::MouseRelease(MouseReleaseEvent::new(
                MouseButton::Left,
                Point::new(x, 5.0),
            )))
        };

        assert!(press(&mut button));
        assert!(button.is_down());
        assert!(release(&mut button, 10.0));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);

        press(&mut button);
        release(&mut button, 500.0);
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
        assert!(!button.is_down());
    }

    #[test]
    fn test_content_follows_geometry() {
        let mut button = PushButton::new("Year");
        button.set_geometry(Rect::new(0.0, 0.0, 80.0, 30.0));
        assert_eq!(
            button.content().unwrap().geometry(),
            Rect::new(4.0, 4.0, 72.0, 22.0)
        );
    }
}
