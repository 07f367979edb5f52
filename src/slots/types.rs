//! Core slot types: intensity periods, recommendations, and wire timestamps.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::SlotError;

/// Wire layout for period timestamps, e.g. `2018-01-20T12:00Z`.
///
/// The upstream API reports minute precision with a literal `Z` suffix, so
/// parsing goes through [`NaiveDateTime`] with this fixed layout.
pub const PERIOD_TIME_LAYOUT: &str = "%Y-%m-%dT%H:%MZ";

/// Carbon intensity readings for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intensity {
    /// Forecast carbon intensity (gCO2/kWh).
    pub forecast: i64,
    /// Measured carbon intensity, absent for future periods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<i64>,
    /// Intensity band label (e.g. `"low"`, `"moderate"`).
    pub index: String,
}

/// One fixed-width slice of the forecast horizon.
///
/// Timestamps stay in their wire format; they are parsed only where
/// arithmetic on them is needed. A series of periods is contiguous,
/// non-overlapping, and ordered by `from` ascending. The engine treats a
/// fetched series as read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// Period start, inclusive.
    pub from: String,
    /// Period end, exclusive.
    pub to: String,
    /// Intensity readings for this period.
    pub intensity: Intensity,
}

/// A chosen set of slots plus the duration-weighted average forecast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// Chosen periods in chronological order; the last one is trimmed when
    /// the requested duration only partially covers it.
    pub slots: Vec<ForecastPeriod>,
    /// Duration-weighted average forecast, floor-divided.
    pub average_forecast: i64,
}

/// Parses a wire-format period timestamp.
///
/// # Errors
///
/// Returns [`SlotError::TimeParse`] when `value` does not match
/// [`PERIOD_TIME_LAYOUT`].
pub fn parse_period_time(value: &str) -> Result<NaiveDateTime, SlotError> {
    NaiveDateTime::parse_from_str(value, PERIOD_TIME_LAYOUT).map_err(|source| {
        SlotError::TimeParse {
            value: value.to_string(),
            source,
        }
    })
}

/// Formats a timestamp back into the wire layout.
pub fn format_period_time(value: NaiveDateTime) -> String {
    value.format(PERIOD_TIME_LAYOUT).to_string()
}
