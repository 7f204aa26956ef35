mod capture;
mod collection;
mod config;
mod errors;
mod export;
mod gate;
mod models;
mod render;
mod routes;
mod sessions;
mod state;
mod wizard;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::capture::NoCamera;
use crate::config::Config;
use crate::export::{ArtifactStore, StubExporter};
use crate::gate::{RewardGate, SystemClock};
use crate::routes::build_router;
use crate::sessions::Sessions;
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

    info!("Starting CareerKit API v{}", env!("CARGO_PKG_VERSION"));

    // Rewarded-view gate with the wall clock injected
    let gate = Arc::new(RewardGate::new(
        Box::new(SystemClock),
        config.gate_countdown_secs,
    ));
    info!("Reward gate initialized ({}s countdown)", config.gate_countdown_secs);

    // Build app state. Camera and exporter are the stub collaborators;
    // platform integrations swap them here.
    let state = AppState {
        config: config.clone(),
        sessions: Arc::new(Sessions::default()),
        artifacts: Arc::new(ArtifactStore::default()),
        gate,
        camera: Arc::new(NoCamera),
        exporter: Arc::new(StubExporter),
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
