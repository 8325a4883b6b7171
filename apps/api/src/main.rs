mod candidates;
mod config;
mod db;
mod email;
mod errors;
mod jobs;
mod models;
mod provider;
mod questions;
mod resume;
mod routes;
mod scoring;
mod state;
mod store;
mod tools;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::email::sender::Mailer;
use crate::provider::build_provider;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::pg::PgStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    let crate_filter = env!("CARGO_PKG_NAME").replace('-', "_");
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", crate_filter, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HireGen API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let pool = create_pool(&config).await?;
    let store = Arc::new(PgStore::new(pool));

    // Resolve the AI provider once from config
    let provider = build_provider(&config);
    info!("AI provider initialized: {}", provider.name());

    // Initialize SMTP mailer (optional; logs as failed when unconfigured)
    let mailer = Arc::new(Mailer::from_config(&config));

    // Build app state
    let state = AppState {
        store,
        provider,
        mailer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
