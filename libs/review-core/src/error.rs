//! Error types for review-core.

use thiserror::Error;

/// Result type alias using SchedulerError.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors surfaced by the review engine.
///
/// Scheduler functions are pure and never fail on valid input; both
/// variants are caller contract violations and leave all state untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("invalid session state: {reason}")]
    InvalidState { reason: String },
}
