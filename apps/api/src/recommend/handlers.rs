//! Axum route handler for recommendation generation.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::recommend::scoring::ScoredRecommendation;
use crate::state::AppState;

const DEFAULT_TOP_N: usize = 5;

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    pub session_id: Uuid,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<ScoredRecommendation>,
}

/// POST /api/v1/recommendations
///
/// Runs the configured evaluator over the session's catalog. Interest scores
/// and requirements that were never submitted count as empty: the matching
/// rules simply never fire.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(req): Json<RecommendationsRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let session = state.sessions.get(req.session_id).ok_or_else(|| {
        AppError::NotFound(format!("Session {} not found", req.session_id))
    })?;

    if session.courses.is_empty() {
        return Err(AppError::Validation(
            "No courses loaded. Upload a catalog or load the sample data first.".to_string(),
        ));
    }

    let requirements = session.requirements.clone().unwrap_or_default();
    let recommendations = state
        .evaluator
        .evaluate(
            &session.courses,
            &session.interest_scores,
            &requirements,
            req.top_n,
        )
        .await;

    Ok(Json(RecommendationsResponse { recommendations }))
}
