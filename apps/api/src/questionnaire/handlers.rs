//! Axum route handlers for the interest questionnaire.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::questionnaire::{aggregate, question_bank, Answer};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub id: usize,
    pub question: String,
    pub options: Vec<String>,
    pub weight: f64,
}

/// GET /api/v1/questions
pub async fn handle_get_questions() -> Json<Vec<QuestionView>> {
    let questions = question_bank()
        .iter()
        .enumerate()
        .map(|(id, question)| QuestionView {
            id,
            question: question.text.to_string(),
            options: question.options().iter().map(|o| o.to_string()).collect(),
            weight: question.weight,
        })
        .collect();
    Json(questions)
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswersRequest {
    pub session_id: Uuid,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Serialize)]
pub struct InterestScoresResponse {
    pub interest_scores: HashMap<String, f64>,
}

/// POST /api/v1/answers
///
/// Aggregates submitted answers into interest scores and stores them on the
/// session.
pub async fn handle_submit_answers(
    State(state): State<AppState>,
    Json(req): Json<SubmitAnswersRequest>,
) -> Result<Json<InterestScoresResponse>, AppError> {
    let scores = aggregate(&req.answers, question_bank());

    let updated = state.sessions.update(req.session_id, |session| {
        session.interest_scores = scores.clone();
    });
    if !updated {
        return Err(AppError::NotFound(format!(
            "Session {} not found",
            req.session_id
        )));
    }

    Ok(Json(InterestScoresResponse {
        interest_scores: scores,
    }))
}
