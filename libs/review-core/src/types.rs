//! Core types for the review engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User-supplied recall rating for a completed review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Get the rating name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = crate::error::SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::from_str(s).ok_or_else(|| crate::error::SchedulerError::InvalidArgument {
            reason: format!("unrecognized difficulty rating: {s:?}"),
        })
    }
}

/// Review badge classification for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Complete,
    Urgent,
    Building,
}

/// A recorded voice note with its review state.
///
/// Defaults live here, in the constructor, not at read sites: a fresh note
/// starts with a completeness score of 50, zero completed reviews, and no
/// scheduled review date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub transcript: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub duration_secs: f64,
    pub completeness_score: u8,
    pub key_points: Vec<String>,
    pub review_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<DateTime<Utc>>,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Create a new note with default review state.
    pub fn new(
        title: impl Into<String>,
        transcript: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            transcript: transcript.into(),
            subject: None,
            duration_secs: 0.0,
            completeness_score: 50,
            key_points: Vec::new(),
            review_count: 0,
            last_review_date: None,
            next_review_date: None,
            is_complete: false,
            created_at,
        }
    }

    /// The instant this note becomes eligible for review.
    ///
    /// A note that has never been scheduled is eligible from its creation
    /// date.
    pub fn effective_due_date(&self) -> DateTime<Utc> {
        self.next_review_date.unwrap_or(self.created_at)
    }
}
