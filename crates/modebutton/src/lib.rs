//! A segmented "mode button" control.
//!
//! A [`ModeButton`](widget::widgets::ModeButton) lays out any number of
//! segment widgets in a row inside one sunken frame, tracks which segment is
//! hovered and which is selected, and reports appends, removals and
//! selection changes through typed signals.
//!
//! # Example
//!
//! ```
//! use modebutton::prelude::*;
//!
//! let mut modes = ModeButton::new();
//! for text in ["Hour", "Day", "Week"] {
//!     modes.append(Label::new(text));
//! }
//! modes.set_geometry(Rect::new(0.0, 0.0, 300.0, 32.0));
//! modes.set_selected(1).unwrap();
//!
//! let style = ModeButtonConfig::default().style();
//! let mut renderer = RecordingRenderer::new();
//! FrameRenderer::render(&mut modes, &mut renderer, &style);
//! assert_eq!(renderer.texts(), vec!["Hour", "Day", "Week"]);
//! ```
//!
//! # Crates
//!
//! - `modebutton-core`: object registry, signals, logging targets
//! - `modebutton-render`: geometry, colors and the `Renderer` trait

pub mod config;
mod error;
pub mod layout;
pub mod prelude;
pub mod style;
pub mod widget;

pub use config::{ModeButtonConfig, ThemeMode};
pub use error::{ConfigError, ConfigResult, ModeButtonError, Result};
