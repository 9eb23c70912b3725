use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus the size of the loaded catalog.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog = state.recommender.catalog();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jobmatch-api",
        "known_skills": catalog.known_skills.len(),
        "jobs": catalog.jobs.len(),
        "sessions": state.sessions.len()
    }))
}
