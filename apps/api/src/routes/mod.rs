pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog;
use crate::gpa;
use crate::questionnaire;
use crate::recommend;
use crate::requirements;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/catalog/upload",
            post(catalog::handlers::handle_upload),
        )
        .route(
            "/api/v1/catalog/sample",
            post(catalog::handlers::handle_sample),
        )
        .route(
            "/api/v1/questions",
            get(questionnaire::handlers::handle_get_questions),
        )
        .route(
            "/api/v1/answers",
            post(questionnaire::handlers::handle_submit_answers),
        )
        .route(
            "/api/v1/requirements",
            post(requirements::handlers::handle_submit_requirements),
        )
        .route(
            "/api/v1/recommendations",
            post(recommend::handlers::handle_recommendations),
        )
        .route("/api/v1/gpa", post(gpa::handlers::handle_gpa))
        .layer(body_limit)
        .with_state(state)
}
