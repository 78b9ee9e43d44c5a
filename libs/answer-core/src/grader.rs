//! Candidate selection and result formatting.

use crate::error::Result;
use crate::matching::evaluate_pair;
use crate::normalize::{normalize_text, split_answer_candidates};
use crate::policy::MatchPolicy;
use crate::types::{EvaluationResult, MatchType, Verdict};
use once_cell::sync::Lazy;

static DEFAULT_GRADER: Lazy<Grader> = Lazy::new(Grader::default);

const NO_ANSWER_LABEL: &str = "no answer submitted";

/// Grades free-text answers under a validated [`MatchPolicy`].
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Grader {
    policy: MatchPolicy,
}

impl Grader {
    /// Create a grader after validating the policy.
    pub fn new(policy: MatchPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Compare a normalized answer to a single normalized candidate.
    pub fn evaluate_single(&self, user: &str, candidate: &str) -> Verdict {
        evaluate_pair(&self.policy, user, candidate)
    }

    /// Grade a raw user answer against a `/`-delimited reference field.
    pub fn evaluate_answer(&self, user_answer: &str, reference: &str) -> EvaluationResult {
        let user = normalize_text(user_answer);
        if user.is_empty() {
            tracing::debug!("empty answer submitted");
            return EvaluationResult {
                accepted: false,
                user_answer: user_answer.to_string(),
                normalized_user_answer: String::new(),
                matched_answer: String::new(),
                match_type: MatchType::None,
                similarity: 0.0,
                threshold: None,
                criteria_label: NO_ANSWER_LABEL.to_string(),
                used_tolerance: false,
            };
        }

        let verdicts = split_answer_candidates(reference)
            .iter()
            .map(|candidate| {
                let verdict = self.evaluate_single(&user, candidate);
                tracing::trace!(
                    candidate = %candidate,
                    match_type = verdict.match_type.as_str(),
                    similarity = verdict.similarity,
                    "evaluated candidate"
                );
                verdict
            })
            .collect();
        let best = pick_best_verdict(verdicts);

        tracing::debug!(
            accepted = best.accepted,
            match_type = best.match_type.as_str(),
            similarity = best.similarity,
            "graded answer"
        );

        EvaluationResult {
            accepted: best.accepted,
            user_answer: user_answer.to_string(),
            normalized_user_answer: user,
            criteria_label: self.criteria_label(&best),
            used_tolerance: best.accepted && best.match_type != MatchType::Exact,
            matched_answer: best.matched_answer,
            match_type: best.match_type,
            similarity: best.similarity,
            threshold: best.threshold,
        }
    }

    /// Whether the answer is accepted by any candidate.
    pub fn is_answer_accepted(&self, user_answer: &str, reference: &str) -> bool {
        self.evaluate_answer(user_answer, reference).accepted
    }

    fn criteria_label(&self, verdict: &Verdict) -> String {
        match verdict.match_type {
            MatchType::Exact => "exact match".to_string(),
            MatchType::Compact => "match ignoring spacing/punctuation".to_string(),
            MatchType::Number => {
                format!("numeric match within ±{}", self.policy.numeric_tolerance)
            }
            MatchType::Token => "token-sequence match".to_string(),
            MatchType::Similarity => {
                let percent = (verdict.threshold.unwrap_or(0.0) * 100.0).round() as i64;
                format!("similarity match at or above {}%", percent)
            }
            MatchType::None => "criteria not met".to_string(),
        }
    }
}

/// Pick the best verdict across all candidates.
///
/// Accepted verdicts win by match priority, then similarity. Without any
/// accepted verdict the most similar rejection is kept for reporting.
/// Ties go to the earliest candidate.
pub fn pick_best_verdict(verdicts: Vec<Verdict>) -> Verdict {
    let mut best_accepted: Option<Verdict> = None;
    let mut best_rejected: Option<Verdict> = None;

    for verdict in verdicts {
        if verdict.accepted {
            let better = match &best_accepted {
                Some(current) => outranks(&verdict, current),
                None => true,
            };
            if better {
                best_accepted = Some(verdict);
            }
        } else {
            let better = match &best_rejected {
                Some(current) => verdict.similarity > current.similarity,
                None => true,
            };
            if better {
                best_rejected = Some(verdict);
            }
        }
    }

    best_accepted
        .or(best_rejected)
        .unwrap_or_else(Verdict::empty)
}

fn outranks(candidate: &Verdict, current: &Verdict) -> bool {
    let (new_priority, old_priority) = (
        candidate.match_type.priority(),
        current.match_type.priority(),
    );
    new_priority > old_priority
        || (new_priority == old_priority && candidate.similarity > current.similarity)
}

/// Grade an answer with the default policy.
pub fn evaluate_answer(user_answer: &str, reference: &str) -> EvaluationResult {
    DEFAULT_GRADER.evaluate_answer(user_answer, reference)
}

/// Whether an answer is accepted under the default policy.
pub fn is_answer_accepted(user_answer: &str, reference: &str) -> bool {
    DEFAULT_GRADER.is_answer_accepted(user_answer, reference)
}

/// Compare two normalized strings with the default policy.
pub fn evaluate_single(user: &str, candidate: &str) -> Verdict {
    DEFAULT_GRADER.evaluate_single(user, candidate)
}
