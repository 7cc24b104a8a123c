//! Core renderer trait defining the 2D drawing interface.
//!
//! Widgets never talk to a graphics backend directly. They receive a
//! `&mut dyn Renderer` inside their paint context and issue rectangle, line
//! and text primitives against it. Backends decide how those primitives turn
//! into pixels.

use crate::paint::Stroke;
use crate::types::{Color, Point, Rect};

/// The core 2D rendering trait.
///
/// # State Stack
///
/// The renderer maintains a state stack (translation and clip) that can be
/// saved and restored. Coordinates passed to drawing calls are in the
/// current local space; clips intersect with any clip already in effect.
///
/// ```ignore
/// renderer.save();
/// renderer.translate(10.0, 10.0);
/// renderer.clip_rect(Rect::new(0.0, 0.0, 80.0, 30.0));
/// renderer.fill_rect(Rect::new(0.0, 0.0, 200.0, 30.0), Color::RED);
/// renderer.restore();
/// ```
pub trait Renderer {
    /// Save the current state.
    fn save(&mut self);

    /// Restore the previously saved state.
    fn restore(&mut self);

    /// Translate subsequent drawing.
    fn translate(&mut self, tx: f32, ty: f32);

    /// Intersect the clip region with `rect` (in local coordinates).
    fn clip_rect(&mut self, rect: Rect);

    /// Current clip bounds in device coordinates, if any clip is active.
    fn clip_bounds(&self) -> Option<Rect>;

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline a rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Draw a line segment.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draw a run of text with its top-left at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str, color: Color);
}

/// Saved renderer state for save/restore operations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderState {
    /// Accumulated translation.
    pub offset: Point,
    /// Clip rect in device coordinates.
    pub clip: Option<Rect>,
    /// Set when an applied clip had no overlap with the clip in effect.
    pub clipped_out: bool,
}

/// Common state management for renderers.
///
/// Renderer implementations embed this to get save/restore, translation
/// and clip intersection for free.
#[derive(Debug, Clone, Default)]
pub struct RenderStateStack {
    stack: Vec<RenderState>,
    current: RenderState,
}

impl RenderStateStack {
    /// Create a new state stack with default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state.
    #[inline]
    pub fn current(&self) -> &RenderState {
        &self.current
    }

    /// Save the current state.
    pub fn save(&mut self) {
        self.stack.push(self.current);
    }

    /// Restore the previously saved state.
    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.current = state;
        }
    }

    /// Apply a translation.
    #[inline]
    pub fn translate(&mut self, tx: f32, ty: f32) {
        self.current.offset = self.current.offset.offset(tx, ty);
    }

    /// Map a local rect to device coordinates.
    #[inline]
    pub fn map_rect(&self, rect: Rect) -> Rect {
        rect.offset(self.current.offset.x, self.current.offset.y)
    }

    /// Map a local point to device coordinates.
    #[inline]
    pub fn map_point(&self, point: Point) -> Point {
        point.offset(self.current.offset.x, self.current.offset.y)
    }

    /// Set a clip rect, intersecting with any existing clip.
    pub fn clip_rect(&mut self, rect: Rect) {
        let mapped = self.map_rect(rect);
        match self.current.clip {
            Some(existing) => match existing.intersect(&mapped) {
                Some(clip) => self.current.clip = Some(clip),
                None => {
                    self.current.clip = Some(Rect::new(mapped.left(), mapped.top(), 0.0, 0.0));
                    self.current.clipped_out = true;
                }
            },
            None => self.current.clip = Some(mapped),
        }
    }

    /// Get the current clip bounds.
    #[inline]
    pub fn clip_bounds(&self) -> Option<Rect> {
        self.current.clip
    }

    /// Whether nothing drawn now could be visible.
    #[inline]
    pub fn is_clipped_out(&self) -> bool {
        self.current.clipped_out || self.current.clip.is_some_and(|c| c.is_empty())
    }

    /// Get the stack depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
