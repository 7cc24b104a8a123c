//! Signal/slot system.
//!
//! A [`Signal<Args>`] is a typed list of observers. Controls expose their
//! notifications as public `Signal` fields; consumers `connect` closures and
//! receive the arguments synchronously, in connection order, every time the
//! control calls [`Signal::emit`].
//!
//! All widget work happens on the UI thread, so slots are always invoked
//! directly in the emitting thread. There is no queued or cross-thread
//! delivery.
//!
//! # Re-entrancy
//!
//! `emit` snapshots the connected slots before invoking them. A slot may
//! therefore connect or disconnect slots (including itself) on the same
//! signal without deadlocking; such changes take effect from the next
//! emission.
//!
//! # Example
//!
//! ```
//! use modebutton_core::Signal;
//!
//! let changed = Signal::<i32>::new();
//! let conn_id = changed.connect(|index| {
//!     println!("selected segment {index}");
//! });
//!
//! changed.emit(2);
//! changed.disconnect(conn_id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal that can have multiple connected slots.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple for multiple arguments.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Emit the signal, invoking every connected slot.
    #[tracing::instrument(skip_all, target = "modebutton_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

static_assertions::assert_impl_all!(Signal<i32>: Send, Sync);
