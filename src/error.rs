//! Engine error taxonomy.

use thiserror::Error;

use crate::upstream::UpstreamError;

/// Errors surfaced by the slot recommendation engine.
///
/// Every variant keeps its original cause in the source chain; none are
/// retried. The caller receives either a complete recommendation or one of
/// these, never a partial result.
#[derive(Debug, Error)]
pub enum SlotError {
    /// The requested duration rounds down to zero slots.
    #[error("invalid duration: request spans {required_slots} slots, need at least 1")]
    InvalidDuration {
        /// Slot count derived from the requested duration.
        required_slots: usize,
    },

    /// The fetched horizon is shorter than the request.
    #[error("not enough forecast data for {required} slots, got {available}")]
    InsufficientData {
        /// Slots the request needs.
        required: usize,
        /// Periods the fetched series actually holds.
        available: usize,
    },

    /// A chosen period carries a timestamp outside the wire layout.
    #[error("failed to parse period timestamp {value:?}: {source}")]
    TimeParse {
        /// The offending timestamp string.
        value: String,
        #[source]
        source: chrono::format::ParseError,
    },

    /// The upstream forecast fetch failed.
    #[error("failed to fetch carbon intensity forecast: {0}")]
    Upstream(#[from] UpstreamError),

    /// Shaping received no slots; selection and shaping disagree.
    #[error("selection produced no slots")]
    EmptySelection,
}
