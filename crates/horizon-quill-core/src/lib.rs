//! Core systems for Horizon Quill.
//!
//! This crate provides the foundational components of the Horizon Quill
//! autocomplete toolkit:
//!
//! - **Geometry**: `Point`, `Size`, and `Rect` value types shared between
//!   text measurement and overlay anchoring
//! - **Signal/Slot System**: Type-safe notification of overlay lifecycle
//!   events
//! - **Timers**: One-shot and repeating timers driven by the host event
//!   loop, used for deferred overlay teardown
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_quill_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let accepted = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = accepted.connect(|text| {
//!     println!("Accepted: {}", text);
//! });
//!
//! // Emit the signal
//! accepted.emit("banana".to_string());
//!
//! // Disconnect when done
//! accepted.disconnect(conn_id);
//! ```
//!
//! # Timer Example
//!
//! ```
//! use horizon_quill_core::TimerManager;
//! use std::time::Duration;
//!
//! let mut timers = TimerManager::new();
//! let id = timers.start_one_shot(Duration::from_millis(150));
//!
//! // Cancel before it fires
//! timers.stop(id).unwrap();
//! assert!(!timers.is_active(id));
//! ```

mod error;
mod geometry;
pub mod logging;
pub mod signal;
mod timer;

pub use error::{QuillError, Result, SignalError, TimerError};
pub use geometry::{Point, Rect, Size};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::{TimerId, TimerKind, TimerManager};
