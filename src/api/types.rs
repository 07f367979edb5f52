//! API wire types for the slots endpoint.

use serde::{Deserialize, Serialize};

use crate::slots::types::{ForecastPeriod, Recommendation};

/// Query parameters for the slots endpoint.
///
/// Both parameters arrive as raw strings: `duration` so that a
/// non-numeric value maps to a 400 instead of an extractor rejection, and
/// `continuous` because only the exact string `"true"` selects continuous
/// mode.
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    /// Requested task duration in minutes.
    pub duration: Option<String>,
    /// Continuity flag; anything but `"true"` means non-continuous.
    pub continuous: Option<String>,
}

/// Successful recommendation response.
#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    /// Chosen periods in chronological order.
    pub slots: Vec<ForecastPeriod>,
    /// Duration-weighted average forecast across the chosen window.
    pub average_forecast: i64,
}

impl From<Recommendation> for SlotsResponse {
    fn from(r: Recommendation) -> Self {
        Self {
            slots: r.slots,
            average_forecast: r.average_forecast,
        }
    }
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
