//! A renderer that records draw calls instead of rasterizing them.
//!
//! [`RecordingRenderer`] is the headless backend: every primitive is stored
//! as a [`DrawCommand`] in device coordinates together with the clip that was
//! in effect. Commands fully hidden by the clip are dropped, the way a real
//! backend would never touch those pixels.
//!
//! # Example
//!
//! ```
//! use modebutton_render::{Color, DrawCommand, Rect, RecordingRenderer, Renderer};
//!
//! let mut renderer = RecordingRenderer::new();
//! renderer.translate(5.0, 0.0);
//! renderer.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
//!
//! assert_eq!(
//!     renderer.commands(),
//!     &[DrawCommand::FillRect {
//!         rect: Rect::new(5.0, 0.0, 10.0, 10.0),
//!         color: Color::RED,
//!         clip: None,
//!     }]
//! );
//! ```

use crate::paint::Stroke;
use crate::renderer::{RenderStateStack, Renderer};
use crate::types::{Color, Point, Rect};

/// One recorded primitive, in device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle.
    FillRect {
        rect: Rect,
        color: Color,
        clip: Option<Rect>,
    },
    /// A rectangle outline.
    StrokeRect {
        rect: Rect,
        stroke: Stroke,
        clip: Option<Rect>,
    },
    /// A line segment.
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
        clip: Option<Rect>,
    },
    /// A run of text.
    Text {
        origin: Point,
        text: String,
        color: Color,
        clip: Option<Rect>,
    },
}

impl DrawCommand {
    /// The clip that was active when the command was recorded.
    pub fn clip(&self) -> Option<Rect> {
        match self {
            Self::FillRect { clip, .. }
            | Self::StrokeRect { clip, .. }
            | Self::Line { clip, .. }
            | Self::Text { clip, .. } => *clip,
        }
    }
}

/// Headless renderer that records every draw call.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    state: RenderStateStack,
    commands: Vec<DrawCommand>,
    culled: usize,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far, in submission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of commands dropped because the clip hid them entirely.
    pub fn culled_count(&self) -> usize {
        self.culled
    }

    /// Remove and return the recorded commands.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Reset recorded commands and render state.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.culled = 0;
        self.state = RenderStateStack::new();
    }

    /// Recorded text runs, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, bounds: Rect, command: DrawCommand) {
        let visible = match self.state.clip_bounds() {
            _ if self.state.is_clipped_out() => false,
            Some(clip) => clip.intersect(&bounds).is_some() || bounds.is_empty(),
            None => true,
        };
        if visible {
            self.commands.push(command);
        } else {
            self.culled += 1;
            tracing::trace!(target: "modebutton_render::recording", ?bounds, "culled draw command");
        }
    }
}

impl Renderer for RecordingRenderer {
    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.state.translate(tx, ty);
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.state.clip_rect(rect);
    }

    fn clip_bounds(&self) -> Option<Rect> {
        self.state.clip_bounds()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = self.state.map_rect(rect);
        let clip = self.state.clip_bounds();
        self.push(rect, DrawCommand::FillRect { rect, color, clip });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        let rect = self.state.map_rect(rect);
        let clip = self.state.clip_bounds();
        self.push(
            rect,
            DrawCommand::StrokeRect {
                rect,
                stroke: *stroke,
                clip,
            },
        );
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let from = self.state.map_point(from);
        let to = self.state.map_point(to);
        let half = stroke.width / 2.0;
        let bounds = Rect::new(
            from.x.min(to.x) - half,
            from.y.min(to.y) - half,
            (from.x - to.x).abs() + stroke.width,
            (from.y - to.y).abs() + stroke.width,
        );
        let clip = self.state.clip_bounds();
        self.push(
            bounds,
            DrawCommand::Line {
                from,
                to,
                stroke: *stroke,
                clip,
            },
        );
    }

    fn draw_text(&mut self, origin: Point, text: &str, color: Color) {
        let origin = self.state.map_point(origin);
        let clip = self.state.clip_bounds();
        self.push(
            Rect::new(origin.x, origin.y, 1.0, 1.0),
            DrawCommand::Text {
                origin,
                text: text.to_owned(),
                color,
                clip,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut renderer = RecordingRenderer::new();
        renderer.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        renderer.draw_line(Point::new(5.0, 0.0), Point::new(5.0, 10.0), &Stroke::default());
        renderer.draw_text(Point::new(1.0, 1.0), "Day", Color::BLACK);

        assert_eq!(renderer.commands().len(), 3);
        assert!(matches!(renderer.commands()[0], DrawCommand::FillRect { .. }));
        assert!(matches!(renderer.commands()[1], DrawCommand::Line { .. }));
        assert_eq!(renderer.texts(), vec!["Day"]);
    }

    #[test]
    fn test_clip_is_recorded_and_restored() {
        let mut renderer = RecordingRenderer::new();
        renderer.save();
        renderer.clip_rect(Rect::new(0.0, 0.0, 50.0, 20.0));
        renderer.fill_rect(Rect::new(0.0, 0.0, 100.0, 20.0), Color::RED);
        renderer.restore();
        renderer.fill_rect(Rect::new(0.0, 0.0, 100.0, 20.0), Color::BLUE);

        assert_eq!(
            renderer.commands()[0].clip(),
            Some(Rect::new(0.0, 0.0, 50.0, 20.0))
        );
        assert_eq!(renderer.commands()[1].clip(), None);
    }

    #[test]
    fn test_fully_clipped_commands_are_culled() {
        let mut renderer = RecordingRenderer::new();
        renderer.clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        renderer.fill_rect(Rect::new(20.0, 20.0, 5.0, 5.0), Color::RED);

        assert!(renderer.commands().is_empty());
        assert_eq!(renderer.culled_count(), 1);
    }

    #[test]
    fn test_translate_applies_to_lines() {
        let mut renderer = RecordingRenderer::new();
        renderer.translate(6.0, 6.0);
        renderer.draw_line(Point::new(0.0, 0.0), Point::new(0.0, 10.0), &Stroke::default());

        match &renderer.commands()[0] {
            DrawCommand::Line { from, to, .. } => {
                assert_eq!(*from, Point::new(6.0, 6.0));
                assert_eq!(*to, Point::new(6.0, 16.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
