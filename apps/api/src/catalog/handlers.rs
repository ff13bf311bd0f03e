//! Axum route handlers for catalog loading.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::catalog::extract::extract_text;
use crate::catalog::sample::sample_catalog;
use crate::catalog::segmenter::segment;
use crate::catalog::tokenizer::{approx_token_count, render_catalog};
use crate::errors::AppError;
use crate::models::course::CourseRecord;
use crate::state::AppState;
use crate::store::Session;

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub count: usize,
    pub approx_tokens: usize,
    pub courses: Vec<CourseRecord>,
}

/// POST /api/v1/catalog/upload
///
/// Multipart upload with a single `pdf` file part. A document that cannot be
/// read or yields no records still succeeds, carrying the sample catalog.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CatalogResponse>, AppError> {
    let mut pdf: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("pdf") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        if !file_name.to_lowercase().ends_with(".pdf") {
            return Err(AppError::Validation(
                "Invalid file type. Please upload a PDF.".to_string(),
            ));
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        if data.len() > state.config.max_upload_bytes {
            return Err(AppError::Validation(format!(
                "File exceeds the {} byte upload limit",
                state.config.max_upload_bytes
            )));
        }
        pdf = Some(data);
    }

    let pdf = pdf.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    let text = extract_text(&pdf);
    let courses = segment(&text);
    Ok(Json(store_catalog(&state, courses)))
}

/// POST /api/v1/catalog/sample
///
/// Loads the built-in sample catalog into a fresh session.
pub async fn handle_sample(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(store_catalog(&state, sample_catalog()))
}

fn store_catalog(state: &AppState, courses: Vec<CourseRecord>) -> CatalogResponse {
    let approx_tokens = approx_token_count(&render_catalog(&courses));
    let count = courses.len();
    let session = Session::new(courses.clone());
    let created_at = session.created_at;
    let session_id = state.sessions.insert(session);
    info!("Catalog loaded: {count} records, ~{approx_tokens} tokens (session {session_id})");
    CatalogResponse {
        session_id,
        created_at,
        count,
        approx_tokens,
        courses,
    }
}
