//! Style lookup and bevelled box painting.
//!
//! Widgets never hard-code colors. The host hands a [`StyleProvider`] to the
//! paint pass, and widgets ask it for a [`BoxStyle`] or [`LineStyle`] keyed by
//! the [`VisualState`] they are drawing. The free functions [`paint_box`] and
//! [`paint_vline`] turn those styles into renderer primitives.

mod palette;

pub use palette::{ColorPalette, PaletteStyle};

use modebutton_render::{Color, Point, Rect, Renderer, Stroke};

/// Visual state a region is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    /// Idle.
    #[default]
    Normal,
    /// Under the pointer.
    Prelight,
    /// Chosen.
    Selected,
}

/// Bevel drawn around a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShadowType {
    /// Flat, no bevel.
    #[default]
    None,
    /// Sunken.
    In,
    /// Raised.
    Out,
    /// Engraved groove.
    EtchedIn,
    /// Embossed ridge.
    EtchedOut,
}

/// Colors used to paint a box in one visual state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    /// Fill color.
    pub background: Color,
    /// Highlight edge color.
    pub light: Color,
    /// Shade edge color.
    pub dark: Color,
}

/// Colors used to paint a separator line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Main line color.
    pub dark: Color,
    /// Highlight drawn one pixel to the right.
    pub light: Color,
    /// Line width.
    pub width: f32,
}

/// Style-supplied measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleMetrics {
    /// Inset between a box frame and its content, in pixels.
    pub inner_border: i32,
}

impl Default for StyleMetrics {
    fn default() -> Self {
        Self { inner_border: 1 }
    }
}

/// Source of colors and metrics for painting.
///
/// Implementations must be cheap to query; widgets call these once per
/// painted region.
pub trait StyleProvider: Send + Sync {
    /// Box colors for `state`.
    fn box_style(&self, state: VisualState) -> BoxStyle;

    /// Separator colors for `state`.
    fn line_style(&self, state: VisualState) -> LineStyle;

    /// Text color for `state`.
    fn text_color(&self, state: VisualState) -> Color;

    /// Measurements such as the inner border width.
    fn metrics(&self) -> StyleMetrics;
}

/// Paint a filled box with a bevel.
///
/// When `clip` is set only the part of the box inside it is drawn. The box
/// itself always spans `rect`, so a clipped selection still shows the bevel
/// edges that fall inside the clip.
pub fn paint_box(
    renderer: &mut dyn Renderer,
    style: &BoxStyle,
    shadow: ShadowType,
    rect: Rect,
    clip: Option<Rect>,
) {
    if rect.is_empty() {
        return;
    }

    renderer.save();
    if let Some(clip) = clip {
        renderer.clip_rect(clip);
    }

    renderer.fill_rect(rect, style.background);

    match shadow {
        ShadowType::None => {}
        ShadowType::In => bevel(renderer, rect, style.dark, style.light),
        ShadowType::Out => bevel(renderer, rect, style.light, style.dark),
        ShadowType::EtchedIn => {
            bevel(renderer, rect, style.dark, style.light);
            bevel(renderer, rect.deflate(1.0), style.light, style.dark);
        }
        ShadowType::EtchedOut => {
            bevel(renderer, rect, style.light, style.dark);
            bevel(renderer, rect.deflate(1.0), style.dark, style.light);
        }
    }

    renderer.restore();
}

/// Paint a vertical separator at `x` from `y1` to `y2`.
pub fn paint_vline(renderer: &mut dyn Renderer, style: &LineStyle, y1: f32, y2: f32, x: f32) {
    if y2 <= y1 {
        return;
    }
    renderer.draw_line(
        Point::new(x, y1),
        Point::new(x, y2),
        &Stroke::new(style.dark, style.width),
    );
    renderer.draw_line(
        Point::new(x + style.width, y1),
        Point::new(x + style.width, y2),
        &Stroke::new(style.light, style.width),
    );
}

// Top and left edges take `top_left`, bottom and right take `bottom_right`.
fn bevel(renderer: &mut dyn Renderer, rect: Rect, top_left: Color, bottom_right: Color) {
    if rect.is_empty() {
        return;
    }
    let tl = Stroke::new(top_left, 1.0);
    let br = Stroke::new(bottom_right, 1.0);
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right() - 1.0, rect.bottom() - 1.0);

    renderer.draw_line(Point::new(l, t), Point::new(r, t), &tl);
    renderer.draw_line(Point::new(l, t), Point::new(l, b), &tl);
    renderer.draw_line(Point::new(l, b), Point::new(r, b), &br);
    renderer.draw_line(Point::new(r, t), Point::new(r, b), &br);
}

#[cfg(test)]
mod tests {
    use super::*;
    use modebutton_render::{DrawCommand, RecordingRenderer};

    fn style() -> BoxStyle {
        BoxStyle {
            background: Color::WHITE,
            light: Color::GRAY,
            dark: Color::BLACK,
        }
    }

    #[test]
    fn test_paint_box_fills_then_bevels() {
        let mut renderer = RecordingRenderer::new();
        paint_box(&mut renderer, &style(), ShadowType::In, Rect::new(0.0, 0.0, 40.0, 20.0), None);

        let commands = renderer.commands();
        assert!(matches!(
            commands[0],
            DrawCommand::FillRect { color, .. } if color == Color::WHITE
        ));
        assert_eq!(commands.len(), 5);
    }

    #[test]
    fn test_etched_shadow_draws_two_bevels() {
        let mut renderer = RecordingRenderer::new();
        paint_box(
            &mut renderer,
            &style(),
            ShadowType::EtchedOut,
            Rect::new(0.0, 0.0, 40.0, 20.0),
            None,
        );
        assert_eq!(renderer.commands().len(), 9);
    }

    #[test]
    fn test_clip_is_scoped_to_the_box() {
        let mut renderer = RecordingRenderer::new();
        let clip = Rect::new(10.0, 0.0, 10.0, 20.0);
        paint_box(
            &mut renderer,
            &style(),
            ShadowType::None,
            Rect::new(0.0, 0.0, 40.0, 20.0),
            Some(clip),
        );

        assert_eq!(renderer.commands()[0].clip(), Some(clip));
        assert_eq!(renderer.clip_bounds(), None);
    }

    #[test]
    fn test_vline_skips_empty_span() {
        let mut renderer = RecordingRenderer::new();
        let line = LineStyle {
            dark: Color::BLACK,
            light: Color::WHITE,
            width: 1.0,
        };
        paint_vline(&mut renderer, &line, 5.0, 5.0, 10.0);
        assert!(renderer.commands().is_empty());

        paint_vline(&mut renderer, &line, 2.0, 18.0, 10.0);
        assert_eq!(renderer.commands().len(), 2);
    }
}
