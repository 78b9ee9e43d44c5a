//! Error types for answer-core.

use thiserror::Error;

/// Result type alias using GradingError.
pub type Result<T> = std::result::Result<T, GradingError>;

/// Errors raised while configuring a grader or scoring a quiz.
///
/// Matching itself never fails: a rejected answer is a normal verdict.
#[derive(Debug, Error, PartialEq)]
pub enum GradingError {
    #[error("numeric tolerance must be a finite, non-negative number (got {value})")]
    InvalidTolerance { value: f64 },

    #[error("similarity threshold must be within [0, 1] (got {value})")]
    InvalidThreshold { value: f64 },

    #[error("threshold bands must have strictly increasing max_len (band {index} has max_len {max_len})")]
    UnorderedBands { index: usize, max_len: usize },

    #[error("correct count {correct} exceeds total {total}")]
    CorrectExceedsTotal { correct: u32, total: u32 },

    #[error("correct count must be 0 when there are no questions (got {correct})")]
    CorrectWithoutQuestions { correct: u32 },
}
