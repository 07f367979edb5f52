//! REST API for slot recommendations.
//!
//! Provides one GET endpoint:
//! - `/slots`: lowest-carbon slots for a requested duration and
//!   continuity flag

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tracing::info;

use crate::slots::engine::SlotEngine;
use crate::slots::source::ForecastSource;

/// Accepted duration range for the slots endpoint, in minutes.
#[derive(Debug, Clone, Copy)]
pub struct DurationLimits {
    /// Smallest accepted duration.
    pub min_minutes: u32,
    /// Largest accepted duration.
    pub max_minutes: u32,
}

/// Immutable application state shared across all request handlers.
///
/// Constructed once at startup and wrapped in `Arc`; requests only read
/// it, so no locks are needed.
pub struct AppState<S> {
    /// Recommendation engine over the configured forecast source.
    pub engine: SlotEngine<S>,
    /// Duration bounds enforced before the engine runs.
    pub limits: DurationLimits,
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router<S>(state: Arc<AppState<S>>) -> Router
where
    S: ForecastSource + Send + Sync + 'static,
{
    Router::new()
        .route("/slots", get(handlers::get_slots::<S>))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `addr` - Socket address to bind to
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve<S>(state: Arc<AppState<S>>, addr: SocketAddr)
where
    S: ForecastSource + Send + Sync + 'static,
{
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    info!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
