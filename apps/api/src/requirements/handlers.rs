//! Axum route handler for graduation requirements.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::requirements::Requirements;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitRequirementsRequest {
    pub session_id: Uuid,
    /// Loosely-typed map as submitted by the client; normalized server-side.
    pub requirements: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct RequirementsResponse {
    pub requirements: Requirements,
}

/// POST /api/v1/requirements
///
/// Normalizes and stores requirement targets on the session, echoing the
/// normalized form.
pub async fn handle_submit_requirements(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequirementsRequest>,
) -> Result<Json<RequirementsResponse>, AppError> {
    let normalized = Requirements::from_raw(&req.requirements);

    let updated = state.sessions.update(req.session_id, |session| {
        session.requirements = Some(normalized.clone());
    });
    if !updated {
        return Err(AppError::NotFound(format!(
            "Session {} not found",
            req.session_id
        )));
    }

    Ok(Json(RequirementsResponse {
        requirements: normalized,
    }))
}
