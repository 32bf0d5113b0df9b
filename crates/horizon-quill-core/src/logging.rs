//! Logging facilities for Horizon Quill.
//!
//! Horizon Quill uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every subsystem logs under an explicit target so individual pieces can
//! be filtered with `tracing` directives, e.g.
//! `RUST_LOG=horizon_quill::overlay=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core systems target.
    pub const CORE: &str = "horizon_quill_core";
    /// Timer system target.
    pub const TIMER: &str = "horizon_quill_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_quill_core::signal";
    /// Text measurement target.
    pub const TEXT: &str = "horizon_quill::text";
    /// Caret location target.
    pub const CARET: &str = "horizon_quill::caret";
    /// Overlay controller target.
    pub const OVERLAY: &str = "horizon_quill::overlay";
}
