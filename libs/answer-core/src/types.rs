//! Core types for answer grading.

use serde::{Deserialize, Serialize};

/// Strategy that decided a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Compact,
    Number,
    Token,
    Similarity,
    None,
}

impl Default for MatchType {
    fn default() -> Self {
        Self::None
    }
}

impl MatchType {
    /// Preference used when several candidates accept the same answer.
    ///
    /// Compact, number and token matches rank equally.
    pub fn priority(self) -> u8 {
        match self {
            Self::Exact => 5,
            Self::Compact | Self::Number | Self::Token => 4,
            Self::Similarity => 3,
            Self::None => 0,
        }
    }

    /// Get the match type tag as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Compact => "compact",
            Self::Number => "number",
            Self::Token => "token",
            Self::Similarity => "similarity",
            Self::None => "none",
        }
    }
}

/// Outcome of comparing one normalized answer to one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub accepted: bool,
    pub match_type: MatchType,
    /// Similarity score between 0.0 and 1.0.
    pub similarity: f64,
    pub threshold: Option<f64>,
    /// The candidate this verdict was evaluated against.
    pub matched_answer: String,
}

impl Verdict {
    pub(crate) fn accepted(
        match_type: MatchType,
        similarity: f64,
        threshold: Option<f64>,
        candidate: &str,
    ) -> Self {
        Self {
            accepted: true,
            match_type,
            similarity,
            threshold,
            matched_answer: candidate.to_string(),
        }
    }

    pub(crate) fn rejected(similarity: f64, threshold: Option<f64>, candidate: &str) -> Self {
        Self {
            accepted: false,
            match_type: MatchType::None,
            similarity,
            threshold,
            matched_answer: candidate.to_string(),
        }
    }

    /// Verdict used when there is nothing to compare against.
    pub fn empty() -> Self {
        Self::rejected(0.0, None, "")
    }
}

/// Final result of grading a user answer against a reference field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub accepted: bool,
    /// The answer exactly as submitted.
    pub user_answer: String,
    pub normalized_user_answer: String,
    pub matched_answer: String,
    pub match_type: MatchType,
    pub similarity: f64,
    pub threshold: Option<f64>,
    /// Human-readable description of the criteria applied.
    pub criteria_label: String,
    /// True when the answer was accepted by anything other than an exact match.
    pub used_tolerance: bool,
}
