use std::sync::Arc;

use crate::config::Config;
use crate::recommend::evaluator::CourseEvaluator;
use crate::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable evaluator. Rule-based by default; Claude when a key is configured.
    pub evaluator: Arc<dyn CourseEvaluator>,
    /// Per-process advising sessions. Nothing survives a restart.
    pub sessions: SessionStore,
}
