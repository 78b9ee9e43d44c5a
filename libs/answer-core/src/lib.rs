//! Core answer grading library shared by the grading service and its callers.
//!
//! Provides:
//! - Text normalization and `/`-delimited candidate splitting
//! - Multi-strategy answer matching (exact, compact, numeric, token, Levenshtein similarity)
//! - Candidate selection and human-readable result formatting
//! - Quiz submission scoring
//! - Shared types (MatchType, Verdict, EvaluationResult, etc.)

pub mod error;
pub mod grader;
pub mod matching;
pub mod normalize;
pub mod policy;
pub mod scoring;
pub mod types;

pub use error::{GradingError, Result};
pub use grader::{evaluate_answer, evaluate_single, is_answer_accepted, pick_best_verdict, Grader};
pub use matching::{levenshtein_distance, similarity_ratio};
pub use normalize::{compact_text, normalize_text, split_answer_candidates, tokenize};
pub use policy::{MatchPolicy, ThresholdBand};
pub use scoring::{score_from_counts, IncorrectItem, QuizItem, ScoreSummary, SubmittedAnswer};
pub use types::{EvaluationResult, MatchType, Verdict};
