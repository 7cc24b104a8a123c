//! Core systems for the mode button control.
//!
//! This crate provides the foundations the widget layer is built on:
//!
//! - **Object Model**: stable [`ObjectId`]s and parent/child bookkeeping
//! - **Signal/Slot System**: typed, synchronous observer lists
//! - **Logging**: `tracing` targets and a performance span guard
//!
//! # Signal/Slot Example
//!
//! ```
//! use modebutton_core::Signal;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicI32, Ordering};
//!
//! let changed = Signal::<i32>::new();
//! let last = Arc::new(AtomicI32::new(-1));
//!
//! let last_clone = last.clone();
//! changed.connect(move |&index| last_clone.store(index, Ordering::SeqCst));
//!
//! changed.emit(1);
//! assert_eq!(last.load(Ordering::SeqCst), 1);
//! ```

mod error;
pub mod logging;
pub mod object;
pub mod signal;

pub use error::{ObjectError, ObjectResult};
pub use logging::PerfSpan;
pub use object::{global_registry, Object, ObjectBase, ObjectId, ObjectRegistry};
pub use signal::{ConnectionId, Signal};
