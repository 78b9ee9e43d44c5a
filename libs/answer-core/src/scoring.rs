//! Quiz submission scoring.

use crate::error::{GradingError, Result};
use crate::grader::Grader;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Shown in place of an answer the user left blank.
pub const NO_ANSWER_PLACEHOLDER: &str = "(no answer)";

/// A quiz question with its `/`-delimited answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// One answer from a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    pub quiz_id: String,
    #[serde(default)]
    pub answer: Option<String>,
}

/// A question the user got wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncorrectItem {
    pub quiz_id: String,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
}

/// Outcome of scoring a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub correct: u32,
    pub total: u32,
    /// Percentage in [0, 100].
    pub score: f64,
    pub incorrect_items: Vec<IncorrectItem>,
}

impl ScoreSummary {
    fn new(correct: u32, total: u32, incorrect_items: Vec<IncorrectItem>) -> Self {
        let score = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64 * 100.0
        };
        Self {
            correct,
            total,
            score,
            incorrect_items,
        }
    }
}

impl Grader {
    /// Grade each submitted answer against its quiz.
    ///
    /// Blank or unknown quiz ids are skipped and do not count towards the
    /// total. A repeated quiz id is graded once, using its last answer, and
    /// keeps the position of its first occurrence.
    pub fn grade_submission(
        &self,
        quizzes: &[QuizItem],
        answers: &[SubmittedAnswer],
    ) -> ScoreSummary {
        let by_id: HashMap<&str, &QuizItem> =
            quizzes.iter().map(|quiz| (quiz.id.trim(), quiz)).collect();

        let mut latest: Vec<(&str, Option<&str>)> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();
        for submitted in answers {
            let quiz_id = submitted.quiz_id.trim();
            if quiz_id.is_empty() {
                continue;
            }
            let answer = submitted.answer.as_deref();
            match slots.get(quiz_id) {
                Some(&slot) => latest[slot].1 = answer,
                None => {
                    slots.insert(quiz_id, latest.len());
                    latest.push((quiz_id, answer));
                }
            }
        }

        let mut correct: u32 = 0;
        let mut total: u32 = 0;
        let mut incorrect_items = Vec::new();

        for (quiz_id, answer) in latest {
            let Some(quiz) = by_id.get(quiz_id) else {
                continue;
            };

            total += 1;
            let answer_text = answer.unwrap_or("");

            if self.is_answer_accepted(answer_text, &quiz.answer) {
                correct += 1;
            } else {
                let user_answer = if answer_text.trim().is_empty() {
                    NO_ANSWER_PLACEHOLDER.to_string()
                } else {
                    answer_text.to_string()
                };
                incorrect_items.push(IncorrectItem {
                    quiz_id: quiz_id.to_string(),
                    question: quiz.question.clone(),
                    user_answer,
                    correct_answer: quiz.answer.clone(),
                });
            }
        }

        tracing::debug!(correct, total, "graded submission");
        ScoreSummary::new(correct, total, incorrect_items)
    }
}

/// Build a summary from counts reported by the client.
pub fn score_from_counts(correct: u32, total: u32) -> Result<ScoreSummary> {
    if total == 0 && correct > 0 {
        return Err(GradingError::CorrectWithoutQuestions { correct });
    }
    if correct > total {
        return Err(GradingError::CorrectExceedsTotal { correct, total });
    }
    Ok(ScoreSummary::new(correct, total, vec![]))
}
