//! Logging and tracing facilities.
//!
//! The workspace instruments itself with the `tracing` crate. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("modebutton=debug,modebutton_core=info")
//!     .init();
//! ```
//!
//! Use the constants in [`targets`] to filter by subsystem.

/// Target names for log filtering.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "modebutton_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "modebutton_core::signal";
    /// Object registry target.
    pub const OBJECT: &str = "modebutton_core::object";
    /// Mode button control target.
    pub const MODE_BUTTON: &str = "modebutton::mode_button";
    /// Segment geometry and layout target.
    pub const LAYOUT: &str = "modebutton::layout";
    /// Configuration loading target.
    pub const CONFIG: &str = "modebutton::config";
    /// Paint pass target.
    pub const PAINT: &str = "modebutton::paint";
}

/// A guard that keeps an info-level span entered for its lifetime.
///
/// Useful for profiling a paint or layout pass:
///
/// ```
/// use modebutton_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("paint");
///     // ... work ...
/// }
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "modebutton::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
