//! Core review engine shared by the Speakback applications.
//!
//! Provides:
//! - Spaced repetition scheduling strategies (count progression, difficulty offset)
//! - Due-set selection and review status classification
//! - Review session sequencing (queue, cursor, state machine)
//! - Shared types (Note, Difficulty, ReviewStatus)

pub mod error;
pub mod schedule;
pub mod session;
pub mod strategy;
pub mod types;

pub use error::{Result, SchedulerError};
pub use schedule::{is_review_due, review_status, select_due_notes};
pub use session::{ReviewSession, SessionState};
pub use strategy::{
    get_strategy, next_interval_days, CountProgression, DifficultyOffset, SchedulingStrategy,
    SRS_INTERVALS,
};
pub use types::{Difficulty, Note, ReviewStatus};
