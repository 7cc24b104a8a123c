//! Widget system.
//!
//! - [`Widget`]: the trait every widget implements
//! - [`WidgetBase`]: shared state widgets embed and delegate to
//! - [`WidgetEvent`]: input and resize events
//! - [`PaintContext`] and [`FrameRenderer`]: the paint pass
//!
//! Concrete widgets live in [`widgets`].

mod base;
mod events;
mod geometry;
mod painting;
mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{
    CrossingMode, EnterEvent, EventBase, LeaveEvent, MouseButton, MouseMoveEvent,
    MousePressEvent, MouseReleaseEvent, ResizeEvent, WidgetEvent,
};
pub use geometry::SizeHint;
pub use painting::FrameRenderer;
pub use traits::{PaintContext, Widget};
