//! Axum route handlers for the dialogue API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{JobListing, SkillSet};
use crate::dialogue::prompts::random_greeting;
use crate::dialogue::store::TurnOutcome;
use crate::errors::AppError;
use crate::models::mode::Mode;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub skills: String,
    pub mode: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ModeQuery {
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub mode: Mode,
    pub greeting: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub known_skills: SkillSet,
    pub jobs: Vec<JobListing>,
}

fn parse_mode(raw: Option<&str>) -> Result<Mode, AppError> {
    match raw {
        None => Ok(Mode::default()),
        Some(raw) => raw.parse::<Mode>().map_err(AppError::Validation),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommend
///
/// Runs one dialogue turn. Omit `session_id` on the first turn and echo the
/// returned one afterwards.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<TurnOutcome>, AppError> {
    let mode = parse_mode(request.mode.as_deref())?;

    let outcome = state.sessions.handle_turn(
        mode,
        request.session_id.as_deref(),
        &request.skills,
        &state.recommender,
    );

    Ok(Json(outcome))
}

/// GET /api/v1/greeting?mode=
pub async fn handle_greeting(
    Query(params): Query<ModeQuery>,
) -> Result<Json<GreetingResponse>, AppError> {
    let mode = parse_mode(params.mode.as_deref())?;
    Ok(Json(GreetingResponse {
        mode,
        greeting: random_greeting(mode),
    }))
}

/// GET /api/v1/catalog
pub async fn handle_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    let catalog = state.recommender.catalog();
    Json(CatalogResponse {
        known_skills: catalog.known_skills.clone(),
        jobs: catalog.jobs.clone(),
    })
}
