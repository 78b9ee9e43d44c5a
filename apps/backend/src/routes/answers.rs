//! Answer evaluation endpoints

use axum::{extract::State, Json};

use crate::models::*;
use crate::AppState;

/// POST /api/answers/evaluate
pub async fn evaluate(
    State(state): State<AppState>,
    Json(payload): Json<AnswerRequest>,
) -> Json<EvaluationResult> {
    Json(
        state
            .grader
            .evaluate_answer(&payload.user_answer, &payload.reference),
    )
}

/// POST /api/answers/check
pub async fn check(
    State(state): State<AppState>,
    Json(payload): Json<AnswerRequest>,
) -> Json<CheckResponse> {
    let accepted = state
        .grader
        .is_answer_accepted(&payload.user_answer, &payload.reference);
    Json(CheckResponse { accepted })
}
