//! Recommendation engine: fetch, slot math, dispatch, and shaping.

use chrono::Utc;
use tracing::debug;

use super::selector;
use super::shaper;
use super::source::ForecastSource;
use super::types::Recommendation;
use crate::error::SlotError;

/// Slot recommendation engine.
///
/// Generic over `S: ForecastSource` for static dispatch. The slot width is
/// explicit construction-time configuration rather than module state, so
/// tests can run the engine with any granularity. Each request is handled
/// statelessly: nothing is cached between calls, and the fetched series is
/// treated as read-only.
pub struct SlotEngine<S> {
    source: S,
    slot_width: u32,
}

impl<S: ForecastSource> SlotEngine<S> {
    /// Creates an engine over the given forecast source.
    ///
    /// # Arguments
    ///
    /// * `source` - Forecast source queried once per request
    /// * `slot_width` - Width of one forecast period in minutes (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if `slot_width` is zero.
    pub fn new(source: S, slot_width: u32) -> Self {
        assert!(slot_width > 0, "slot_width must be > 0");
        Self { source, slot_width }
    }

    /// Recommends the lowest-carbon slots for a task of `required_duration`
    /// minutes, contiguous when `continuous` is set.
    ///
    /// Fetches the forecast series anchored at the current instant,
    /// derives the slot count by ceiling division, dispatches to the
    /// matching search, and shapes the result.
    ///
    /// # Errors
    ///
    /// [`SlotError::Upstream`] when the fetch fails,
    /// [`SlotError::InvalidDuration`] when the duration rounds to zero
    /// slots, [`SlotError::InsufficientData`] when the fetched horizon is
    /// shorter than the request, and [`SlotError::TimeParse`] when a
    /// chosen period carries a malformed timestamp. Failures propagate
    /// with context; none are retried.
    pub async fn recommend(
        &self,
        required_duration: u32,
        continuous: bool,
    ) -> Result<Recommendation, SlotError> {
        let anchor = Utc::now().naive_utc();
        let series = self.source.forecast_from(anchor).await?;

        let required_slots = required_duration.div_ceil(self.slot_width) as usize;
        debug!(
            required_duration,
            required_slots, continuous, "selecting slots"
        );

        let chosen = if continuous {
            selector::select_continuous(&series, required_slots)?
        } else {
            selector::select_non_continuous(&series, required_slots)?
        };

        shaper::shape(chosen, required_duration, self.slot_width)
    }
}
