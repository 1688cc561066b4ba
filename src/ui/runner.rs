//! Router assembly and server startup.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::infrastructure::DadJokeClient;

use super::handler::{get_rooms, health_check, websocket_handler};
use super::signal::shutdown_signal;
use super::state::AppState;

/// Build the relay's router over the given state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat/{room}", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/rooms", get(get_rooms))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the relay with the production joke fetcher until shutdown.
pub async fn run(config: &ServerConfig) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(Arc::new(DadJokeClient::new())));
    run_with_state(config, state).await
}

/// Run the relay over externally built state (tests inject their own).
pub async fn run_with_state(config: &ServerConfig, state: Arc<AppState>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}
