//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use super::types::{ErrorResponse, SlotsQuery, SlotsResponse};
use super::{AppState, DurationLimits};
use crate::slots::source::ForecastSource;

/// Recommends the lowest-carbon slots for a task.
///
/// `GET /slots?duration=90&continuous=true` → 200 + `SlotsResponse` JSON
/// `GET /slots?duration=abc` → 400 + `ErrorResponse`
/// `GET /slots` with an engine failure → 500 + error text
pub async fn get_slots<S>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<SlotsQuery>,
) -> Response
where
    S: ForecastSource + Send + Sync + 'static,
{
    let duration = match parse_duration(query.duration.as_deref(), &state.limits) {
        Ok(minutes) => minutes,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
                .into_response();
        }
    };

    // Only the exact string "true" requests a contiguous window.
    let continuous = query.continuous.as_deref() == Some("true");

    match state.engine.recommend(duration, continuous).await {
        Ok(recommendation) => Json(SlotsResponse::from(recommendation)).into_response(),
        Err(err) => {
            warn!(error = %err, duration, continuous, "slot recommendation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

/// Bounds-checks the raw duration parameter; absence selects the minimum.
fn parse_duration(raw: Option<&str>, limits: &DurationLimits) -> Result<u32, String> {
    let Some(raw) = raw else {
        return Ok(limits.min_minutes);
    };

    let minutes: u32 = raw
        .parse()
        .map_err(|_| format!("`duration` ({raw}) is not a valid integer"))?;

    if minutes < limits.min_minutes || minutes > limits.max_minutes {
        return Err(format!(
            "`duration` ({minutes}) must be between {} and {} minutes",
            limits.min_minutes, limits.max_minutes
        ));
    }

    Ok(minutes)
}
