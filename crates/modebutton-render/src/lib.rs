//! Drawing layer for the mode button control.
//!
//! This crate provides the geometry and color types shared by the widget
//! layer, the [`Renderer`] trait that widgets paint against, and
//! [`RecordingRenderer`], a headless backend that records draw calls.
//!
//! # Using the Renderer
//!
//! ```
//! use modebutton_render::{Color, Point, Rect, RecordingRenderer, Renderer, Stroke};
//!
//! let mut renderer = RecordingRenderer::new();
//!
//! renderer.fill_rect(Rect::new(0.0, 0.0, 300.0, 30.0), Color::WHITE);
//!
//! renderer.save();
//! renderer.clip_rect(Rect::new(101.0, 0.0, 100.0, 30.0));
//! renderer.fill_rect(Rect::new(0.0, 0.0, 300.0, 30.0), Color::BLUE);
//! renderer.restore();
//!
//! renderer.draw_line(Point::new(101.0, 2.0), Point::new(101.0, 27.0), &Stroke::default());
//! assert_eq!(renderer.commands().len(), 3);
//! ```

mod paint;
mod recording;
mod renderer;
mod types;

// Renderer API
pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::{RenderState, RenderStateStack, Renderer};

// Drawing types
pub use paint::{LineCap, Stroke};
pub use types::{Color, Point, Rect, Size};
