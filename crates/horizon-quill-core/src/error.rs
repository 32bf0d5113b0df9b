//! Error types for Horizon Quill core systems.

use thiserror::Error;

/// The main error type for Horizon Quill core operations.
#[derive(Error, Debug)]
pub enum QuillError {
    /// Timer-related error.
    #[error("timer error: {0}")]
    Timer(#[from] TimerError),

    /// Signal-related error.
    #[error("signal error: {0}")]
    Signal(#[from] SignalError),
}

/// Timer-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The timer ID is invalid or has already been removed.
    #[error("invalid or expired timer ID")]
    InvalidTimerId,
}

/// Signal-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("invalid or disconnected connection ID")]
    InvalidConnection,
}

/// A specialized Result type for Horizon Quill core operations.
pub type Result<T> = std::result::Result<T, QuillError>;
