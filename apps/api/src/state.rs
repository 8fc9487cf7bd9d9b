use std::sync::Arc;

use crate::resumes::repository::ResumeRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Resume persistence. Postgres in production, in-memory under test.
    pub resumes: Arc<dyn ResumeRepository>,
}
