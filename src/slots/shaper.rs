//! Duration-weighted averaging and recommendation shaping.

use chrono::Duration;

use super::types::{ForecastPeriod, Recommendation, format_period_time, parse_period_time};
use crate::error::SlotError;

/// Turns a chosen set of periods into the final recommendation.
///
/// Partial coverage is always attributed to the trailing slot: when the
/// requested duration is not an exact multiple of the slot width, the last
/// period contributes only the remainder minutes to the average and its
/// `to` timestamp is pulled back to `from + remainder`, so the output
/// window spans exactly the requested duration. Per-slot forecasts are
/// emitted unweighted; only the aggregate average is weighted.
///
/// # Errors
///
/// [`SlotError::EmptySelection`] when `chosen` is empty or the duration is
/// zero (an internal invariant violation if selection validated its
/// input), [`SlotError::TimeParse`] when the trailing slot's `from` cannot
/// be parsed.
pub fn shape(
    chosen: Vec<ForecastPeriod>,
    required_duration: u32,
    slot_width: u32,
) -> Result<Recommendation, SlotError> {
    if chosen.is_empty() || required_duration == 0 {
        return Err(SlotError::EmptySelection);
    }

    let average_forecast = weighted_average(&chosen, required_duration, slot_width);

    let mut slots = chosen;
    let remainder = required_duration % slot_width;
    if remainder != 0 {
        let last = slots.len() - 1;
        let start = parse_period_time(&slots[last].from)?;
        slots[last].to = format_period_time(start + Duration::minutes(i64::from(remainder)));
    }

    Ok(Recommendation {
        slots,
        average_forecast,
    })
}

/// Mean forecast where each period's contribution is proportional to the
/// minutes of the requested duration it covers, floor-divided.
fn weighted_average(chosen: &[ForecastPeriod], required_duration: u32, slot_width: u32) -> i64 {
    let remainder = required_duration % slot_width;
    let last_weight = if remainder == 0 { slot_width } else { remainder };

    let last = chosen.len() - 1;
    let mut sum: i64 = chosen[..last]
        .iter()
        .map(|p| p.intensity.forecast * i64::from(slot_width))
        .sum();
    sum += chosen[last].intensity.forecast * i64::from(last_weight);

    sum / i64::from(required_duration)
}
