//! Commonly used types.
//!
//! ```
//! use modebutton::prelude::*;
//! ```

pub use modebutton_core::{Object, ObjectId, Signal};
pub use modebutton_render::{Color, Point, Rect, RecordingRenderer, Renderer, Size};

pub use crate::config::{ModeButtonConfig, ThemeMode};
pub use crate::error::ModeButtonError;
pub use crate::layout::{compute_layout, LayoutItem, LayoutKind};
pub use crate::style::{ColorPalette, PaletteStyle, StyleProvider, VisualState};
pub use crate::widget::widgets::{Label, ModeButton, PushButton};
pub use crate::widget::{FrameRenderer, PaintContext, Widget, WidgetEvent};
