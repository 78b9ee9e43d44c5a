//! Quiz scoring endpoints

use answer_core::score_from_counts;
use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/scores/grade
///
/// Grades `user_answers` against `quizzes` when any answer carries a quiz
/// id, otherwise validates the self-reported `correct`/`total` counts.
pub async fn grade(
    State(state): State<AppState>,
    Json(payload): Json<GradeScoreRequest>,
) -> Result<Json<ScoreSummary>> {
    let has_answers = payload
        .user_answers
        .iter()
        .any(|answer| !answer.quiz_id.trim().is_empty());
    if !has_answers {
        let summary = score_from_counts(payload.correct, payload.total)?;
        return Ok(Json(summary));
    }

    if payload.quizzes.is_empty() {
        return Err(ApiError::BadRequest(
            "quizzes are required when user_answers are submitted".to_string(),
        ));
    }

    let summary = state
        .grader
        .grade_submission(&payload.quizzes, &payload.user_answers);

    tracing::info!(
        "Graded submission: {}/{} correct ({:.1}%)",
        summary.correct,
        summary.total,
        summary.score
    );

    Ok(Json(summary))
}
