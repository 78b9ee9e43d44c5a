//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from answer-core
pub use answer_core::{EvaluationResult, IncorrectItem, QuizItem, ScoreSummary, SubmittedAnswer};

/// Total assumed when a client reports counts without a total.
pub const DEFAULT_QUESTION_COUNT: u32 = 10;

/// Request body for answer evaluation
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub user_answer: String,
    pub reference: String,
}

/// Response for the accepted-only check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    pub accepted: bool,
}

/// Request body for scoring a quiz round
#[derive(Debug, Clone, Deserialize)]
pub struct GradeScoreRequest {
    #[serde(default)]
    pub quizzes: Vec<QuizItem>,
    #[serde(default)]
    pub user_answers: Vec<SubmittedAnswer>,
    #[serde(default)]
    pub correct: u32,
    #[serde(default = "default_total")]
    pub total: u32,
}

fn default_total() -> u32 {
    DEFAULT_QUESTION_COUNT
}
