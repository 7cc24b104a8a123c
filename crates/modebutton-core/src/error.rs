//! Error types for the core crate.

use thiserror::Error;

/// Errors raised by the object registry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectError {
    /// The object ID is invalid or the object has been destroyed.
    #[error("invalid or destroyed object ID")]
    InvalidObjectId,
    /// Attempted to set an object as its own parent or ancestor.
    #[error("cannot set an object as its own parent or ancestor")]
    CircularParentage,
}

/// Result type for object operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;
