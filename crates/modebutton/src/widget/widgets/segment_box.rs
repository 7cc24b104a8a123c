//! Homogeneous horizontal container used inside the mode button.
//!
//! Every visible child receives an equal share of the content width
//! (`width - 2 * border_width - spacing * (n - 1)`), inset by `padding` on
//! both sides, and the full content height. Hidden children take no space.

use modebutton_core::logging::targets;
use modebutton_core::{Object, ObjectId};
use modebutton_render::{Rect, Size};

use crate::widget::{PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent};

/// An owning row of equally sized children.
pub struct SegmentBox {
    base: WidgetBase,
    children: Vec<Box<dyn Widget>>,
    spacing: f32,
    border_width: f32,
    padding: f32,
}

impl SegmentBox {
    /// Create an empty box with the given metrics.
    pub fn new(spacing: f32, border_width: f32, padding: f32) -> Self {
        Self {
            base: WidgetBase::new::<Self>(),
            children: Vec::new(),
            spacing,
            border_width,
            padding,
        }
    }

    /// Number of children, hidden ones included.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the box has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child at `index`.
    pub fn get(&self, index: usize) -> Option<&dyn Widget> {
        self.children.get(index).map(|c| c.as_ref())
    }

    /// Mutable child at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Widget + 'static)> {
        self.children.get_mut(index).map(|c| c.as_mut())
    }

    /// Iterate over the children in order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Widget> {
        self.children.iter().map(|c| c.as_ref())
    }

    /// Append a child, taking ownership and reparenting it to this box.
    pub fn push(&mut self, child: Box<dyn Widget>) {
        if let Err(err) = child.widget_base().set_parent(Some(self.base.object_id())) {
            tracing::warn!(target: targets::LAYOUT, %err, "failed to parent segment");
        }
        self.children.push(child);
        self.relayout();
    }

    /// Remove the child at `index`, clearing its parent and handing it back.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Widget>> {
        if index >= self.children.len() {
            return None;
        }
        let child = self.children.remove(index);
        if let Err(err) = child.widget_base().set_parent(None) {
            tracing::warn!(target: targets::LAYOUT, %err, "failed to detach segment");
        }
        self.relayout();
        Some(child)
    }

    /// Change the container metrics and lay out again.
    pub fn set_metrics(&mut self, spacing: f32, border_width: f32, padding: f32) {
        self.spacing = spacing;
        self.border_width = border_width;
        self.padding = padding;
        self.relayout();
    }

    /// Gap between adjacent slots.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Inset between the box edge and the slots.
    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    /// Horizontal inset inside each slot.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Recompute every visible child's geometry from the box's size.
    pub fn relayout(&mut self) {
        let visible = self.children.iter().filter(|c| c.is_visible()).count();
        if visible == 0 {
            return;
        }

        let content = self.base.rect().deflate(self.border_width);
        let total_spacing = self.spacing * (visible - 1) as f32;
        let slot = ((content.width() - total_spacing) / visible as f32).max(0.0);
        let child_height = content.height().max(0.0);
        let child_width = (slot - self.padding * 2.0).max(0.0);

        let mut x = content.left();
        for child in self.children.iter_mut().filter(|c| c.is_visible()) {
            child.set_geometry(Rect::new(x + self.padding, content.top(), child_width, child_height));
            x += slot + self.spacing;
        }

        tracing::trace!(target: targets::LAYOUT, visible, slot, "segment box laid out");
    }
}

impl Object for SegmentBox {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for SegmentBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let mut widest: f32 = 0.0;
        let mut tallest: f32 = 0.0;
        let mut min_widest: f32 = 0.0;
        let mut visible = 0usize;

        for child in self.children.iter().filter(|c| c.is_visible()) {
            let hint = child.size_hint();
            widest = widest.max(hint.preferred.width);
            tallest = tallest.max(hint.preferred.height);
            min_widest = min_widest.max(hint.effective_minimum().width);
            visible += 1;
        }

        let border = self.border_width * 2.0;
        if visible == 0 {
            return SizeHint::from_dimensions(border, border);
        }

        let spacing = self.spacing * (visible - 1) as f32;
        let padding = self.padding * 2.0;
        let n = visible as f32;
        SizeHint::from_dimensions((widest + padding) * n + spacing + border, tallest + border)
            .with_minimum(Size::new((min_widest + padding) * n + spacing + border, border))
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        for child in &self.children {
            ctx.paint_child(child.as_ref());
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        if let WidgetEvent::Resize(_) = event {
            self.relayout();
        }
        false
    }
}

static_assertions::assert_impl_all!(SegmentBox: Send, Sync);
