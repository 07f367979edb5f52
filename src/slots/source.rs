//! Forecast source contract.

use chrono::NaiveDateTime;

use super::types::ForecastPeriod;
use crate::upstream::UpstreamError;

/// Anything able to return the carbon-intensity forecast series for the
/// roughly 24 hours following an anchor instant.
///
/// The single method keeps the seam narrow: the production implementation
/// is [`crate::upstream::CarbonIntensityApi`], and tests substitute a
/// canned series without touching the network. Futures are `Send` so the
/// engine stays usable from spawned request handlers.
pub trait ForecastSource {
    /// Fetches the time-ordered forecast periods starting at `anchor`.
    fn forecast_from(
        &self,
        anchor: NaiveDateTime,
    ) -> impl Future<Output = Result<Vec<ForecastPeriod>, UpstreamError>> + Send;
}
