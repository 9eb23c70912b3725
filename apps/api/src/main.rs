mod catalog;
mod config;
mod dialogue;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{Catalog, CsvCatalogSource};
use crate::config::Config;
use crate::dialogue::SessionStore;
use crate::matching::extractor::SkillExtractor;
use crate::matching::Recommender;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobmatch API v{}", env!("CARGO_PKG_VERSION"));

    // Catalog is loaded once; a bad source falls back to the built-in default
    let catalog = Catalog::load(&CsvCatalogSource::new(&config.jobs_csv));
    let recommender = Recommender::new(Arc::new(catalog), SkillExtractor::default());

    let state = AppState {
        recommender,
        sessions: Arc::new(SessionStore::new()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
