//! Spoken-answer evaluation collaborator.
//!
//! The full system hands transcripts to an external LLM for grading. That
//! call sits behind [`AnswerEvaluator`] so the scheduling engine and the
//! API never depend on it directly; the shipped implementation is the
//! deterministic mock fallback used when no API key is configured. The RNG
//! is injected and seedable, which keeps every test run reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use review_core::Note;
use serde::Serialize;
use std::sync::Mutex;

/// Result of evaluating a spoken answer against a note.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// Factual correctness, 0-100.
    pub accuracy: u8,
    /// Key-point coverage, 0-100.
    pub completeness: u8,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub missed_points: Vec<String>,
}

/// Trait for spoken-answer evaluators.
pub trait AnswerEvaluator: Send + Sync {
    fn evaluate(&self, note: &Note, spoken_answer: &str) -> Evaluation;
}

const STRENGTHS: [&str; 6] = [
    "Clear articulation of main concepts",
    "Good use of subject-specific terminology",
    "Logical flow of ideas",
    "Relevant examples provided",
    "Strong understanding of core principles",
    "Good connection between concepts",
];

const MISSED_POINTS: [&str; 6] = [
    "Could elaborate more on the underlying mechanisms",
    "Consider discussing alternative perspectives",
    "Include more specific examples",
    "Connect to broader theoretical framework",
    "Explain the practical implications",
    "Discuss potential limitations or exceptions",
];

/// Seeded mock evaluator with jittered scores.
///
/// Accuracy lands in 70-95, completeness in 60-90, matching the live
/// service's typical range closely enough for the feedback templates.
pub struct MockEvaluator {
    rng: Mutex<StdRng>,
}

impl MockEvaluator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl AnswerEvaluator for MockEvaluator {
    fn evaluate(&self, _note: &Note, _spoken_answer: &str) -> Evaluation {
        let mut rng = self.rng.lock().expect("rng lock");

        let accuracy: u8 = rng.gen_range(70..=95);
        let completeness: u8 = rng.gen_range(60..=90);
        let strengths_count = rng.gen_range(2..=3);
        let missed_count = rng.gen_range(1..=2);

        let grasp = if accuracy > 80 {
            "strong"
        } else if accuracy > 65 {
            "good"
        } else {
            "developing"
        };
        let coverage = if completeness > 75 {
            "You covered most of the key points effectively."
        } else if completeness > 60 {
            "You addressed several important aspects but could expand on some areas."
        } else {
            "Consider including more detail on the key concepts."
        };
        let phrasing = if accuracy > 75 {
            "Your explanation shows clear comprehension and good use of terminology."
        } else {
            "Focus on connecting ideas more explicitly and using precise terminology."
        };

        Evaluation {
            accuracy,
            completeness,
            feedback: format!(
                "Your answer demonstrates {grasp} understanding of the core concepts. \
                 {coverage} {phrasing} Keep practicing to strengthen your explanations \
                 and build confidence."
            ),
            strengths: STRENGTHS[..strengths_count]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            missed_points: MISSED_POINTS[..missed_count]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
