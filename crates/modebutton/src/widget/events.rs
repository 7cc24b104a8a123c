//! Widget event types.
//!
//! Events are delivered to [`Widget::event`](super::Widget::event) wrapped in
//! [`WidgetEvent`]. Each concrete event carries an [`EventBase`] holding the
//! accepted flag. A widget accepts the events it handles, and its
//! `Widget::event` return value reports that flag back to the host.

use modebutton_render::{Point, Size};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Why the pointer crossed a widget boundary.
///
/// Only [`CrossingMode::Normal`] reflects the pointer physically moving. Grab
/// and ungrab crossings are synthesized when a pointer grab starts or ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrossingMode {
    /// The pointer moved across the boundary.
    #[default]
    Normal,
    /// A pointer grab started.
    Grab,
    /// A pointer grab ended.
    Ungrab,
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Mark the event as handled.
    pub fn accept(&mut self) {
        self.accepted = true;
    }
}

/// The widget was resized.
#[derive(Debug, Clone, Copy)]
pub struct ResizeEvent {
    /// Base event data.
    pub base: EventBase,
    /// Size before the resize.
    pub old_size: Size,
    /// Size after the resize.
    pub new_size: Size,
}

impl ResizeEvent {
    /// Create a new resize event.
    pub fn new(old_size: Size, new_size: Size) -> Self {
        Self {
            base: EventBase::new(),
            old_size,
            new_size,
        }
    }
}

/// A mouse button was pressed.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// A mouse button was released.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// The pointer moved over the widget.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Mouse buttons currently held, one bit per [`MouseButton`].
    pub buttons: u8,
}

impl MouseMoveEvent {
    /// Create a new mouse move event with no buttons held.
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
            buttons: 0,
        }
    }
}

/// The pointer entered the widget.
#[derive(Debug, Clone, Copy)]
pub struct EnterEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl EnterEvent {
    /// Create a new enter event.
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// The pointer left the widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaveEvent {
    /// Base event data.
    pub base: EventBase,
    /// Why the crossing happened.
    pub mode: CrossingMode,
}

impl LeaveEvent {
    /// Create a leave event for a physical pointer move.
    pub fn new() -> Self {
        Self::with_mode(CrossingMode::Normal)
    }

    /// Create a leave event with an explicit crossing mode.
    pub fn with_mode(mode: CrossingMode) -> Self {
        Self {
            base: EventBase::new(),
            mode,
        }
    }
}

/// Any event a widget can receive.
#[derive(Debug, Clone, Copy)]
pub enum WidgetEvent {
    /// Resize event.
    Resize(ResizeEvent),
    /// Mouse press event.
    MousePress(MousePressEvent),
    /// Mouse release event.
    MouseRelease(MouseReleaseEvent),
    /// Mouse move event.
    MouseMove(MouseMoveEvent),
    /// Pointer entered.
    Enter(EnterEvent),
    /// Pointer left.
    Leave(LeaveEvent),
}

impl WidgetEvent {
    fn base(&self) -> &EventBase {
        match self {
            Self::Resize(e) => &e.base,
            Self::MousePress(e) => &e.base,
            Self::MouseRelease(e) => &e.base,
            Self::MouseMove(e) => &e.base,
            Self::Enter(e) => &e.base,
            Self::Leave(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::Resize(e) => &mut e.base,
            Self::MousePress(e) => &mut e.base,
            Self::MouseRelease(e) => &mut e.base,
            Self::MouseMove(e) => &mut e.base,
            Self::Enter(e) => &mut e.base,
            Self::Leave(e) => &mut e.base,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }
}
