use std::sync::Arc;

use crate::dialogue::SessionStore;
use crate::matching::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Extractor + matcher over the catalog loaded at startup (read-only).
    pub recommender: Recommender,
    pub sessions: Arc<SessionStore>,
}
