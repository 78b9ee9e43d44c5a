//! Test fixtures and factory functions for creating request bodies.

use serde_json::{json, Value};

/// Request body for the answer endpoints.
pub fn answer_request(user_answer: &str, reference: &str) -> Value {
    json!({
        "user_answer": user_answer,
        "reference": reference,
    })
}

/// A small quiz round covering the main match strategies.
pub fn sample_quizzes() -> Value {
    json!([
        { "id": "q1", "question": "Which language runs in the browser?", "answer": "JS/JavaScript" },
        { "id": "q2", "question": "Value of pi to two decimals?", "answer": "3.14" },
        { "id": "q3", "question": "Java web framework by VMware?", "answer": "Spring Boot" },
        { "id": "q4", "question": "Capital of Korea?", "answer": "서울/Seoul" },
    ])
}

/// One submitted answer.
pub fn submitted(quiz_id: &str, answer: Option<&str>) -> Value {
    json!({
        "quiz_id": quiz_id,
        "answer": answer,
    })
}
