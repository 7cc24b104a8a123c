//! Frame rendering for widget trees.
//!
//! Widgets call `update()` to schedule a repaint. At frame time the host
//! calls [`FrameRenderer::render`] (or [`FrameRenderer::render_if_needed`])
//! with the root widget, a renderer and a style. The root is painted at its
//! geometry, clipped to its bounds, and containers paint their children
//! through [`PaintContext::paint_child`].

use modebutton_core::PerfSpan;
use modebutton_core::logging::targets;
use modebutton_render::Renderer;

use super::traits::{PaintContext, Widget};
use crate::style::StyleProvider;

/// Paints a widget tree into a renderer.
pub struct FrameRenderer;

impl FrameRenderer {
    /// Paint `root` and its children, then clear its repaint flag.
    pub fn render(root: &mut dyn Widget, renderer: &mut dyn Renderer, style: &dyn StyleProvider) {
        let _span = PerfSpan::new("frame");

        if root.is_visible() && !root.rect().is_empty() {
            let pos = root.pos();
            let local = root.rect();

            renderer.save();
            renderer.translate(pos.x, pos.y);
            renderer.clip_rect(local);
            let mut ctx = PaintContext::new(renderer, style, local);
            root.paint(&mut ctx);
            renderer.restore();
        } else {
            tracing::trace!(target: targets::PAINT, "root hidden or empty, nothing painted");
        }

        root.widget_base_mut().clear_repaint_flag();
    }

    /// Paint `root` only if it requested a repaint. Returns whether it painted.
    pub fn render_if_needed(
        root: &mut dyn Widget,
        renderer: &mut dyn Renderer,
        style: &dyn StyleProvider,
    ) -> bool {
        if !root.widget_base().needs_repaint() {
            return false;
        }
        Self::render(root, renderer, style);
        true
    }
}
