//! Size hints used by containers to lay out children.

use modebutton_render::Size;

/// Preferred, minimum and maximum sizes for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHint {
    /// The size the widget displays best at.
    pub preferred: Size,
    /// The smallest acceptable size, if constrained.
    pub minimum: Option<Size>,
    /// The largest useful size, if constrained.
    pub maximum: Option<Size>,
}

impl SizeHint {
    /// Create a size hint with the given preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
            maximum: None,
        }
    }

    /// Create a size hint from explicit dimensions.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Set the minimum size.
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// The minimum size, or zero when unconstrained.
    pub fn effective_minimum(&self) -> Size {
        self.minimum.unwrap_or(Size::ZERO)
    }
}
