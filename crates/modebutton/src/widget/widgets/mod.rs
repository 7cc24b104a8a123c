//! Concrete widgets.

mod label;
mod mode_button;
mod push_button;
mod segment_box;

pub use label::{Label, CHAR_WIDTH, LINE_HEIGHT};
pub use mode_button::ModeButton;
pub use push_button::PushButton;
pub use segment_box::SegmentBox;
