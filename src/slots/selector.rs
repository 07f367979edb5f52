//! Slot selection: lowest-average continuous window and lowest-forecast set.

use super::types::ForecastPeriod;
use crate::error::SlotError;

/// Finds the contiguous run of `required_slots` periods with the lowest
/// average forecast.
///
/// Maintains a running window sum and slides it across the series, so the
/// whole search is O(n) time and O(1) extra space. Comparing sums is
/// equivalent to comparing means for a fixed window length; the comparison
/// is strict, so the first window to reach the minimum wins on ties.
///
/// # Errors
///
/// [`SlotError::InvalidDuration`] when `required_slots` is zero,
/// [`SlotError::InsufficientData`] when the series is shorter than the
/// window.
pub fn select_continuous(
    series: &[ForecastPeriod],
    required_slots: usize,
) -> Result<Vec<ForecastPeriod>, SlotError> {
    check_bounds(series, required_slots)?;

    let mut window_sum: i64 = series[..required_slots]
        .iter()
        .map(|p| p.intensity.forecast)
        .sum();
    let mut best_sum = window_sum;
    let mut best_start = 0;

    for start in 1..=(series.len() - required_slots) {
        window_sum -= series[start - 1].intensity.forecast;
        window_sum += series[start + required_slots - 1].intensity.forecast;
        if window_sum < best_sum {
            best_sum = window_sum;
            best_start = start;
        }
    }

    Ok(series[best_start..best_start + required_slots].to_vec())
}

/// Picks the `required_slots` periods with the lowest forecasts, anywhere
/// in the series, returned in chronological order.
///
/// Sorts a derived index permutation rather than the caller's series; the
/// input is never reordered. The stable sort breaks equal forecasts by
/// chronological position, keeping results reproducible.
///
/// # Errors
///
/// Same contract as [`select_continuous`].
pub fn select_non_continuous(
    series: &[ForecastPeriod],
    required_slots: usize,
) -> Result<Vec<ForecastPeriod>, SlotError> {
    check_bounds(series, required_slots)?;

    let mut by_forecast: Vec<usize> = (0..series.len()).collect();
    by_forecast.sort_by_key(|&i| series[i].intensity.forecast);

    let mut chosen = by_forecast[..required_slots].to_vec();
    chosen.sort_unstable();

    Ok(chosen.into_iter().map(|i| series[i].clone()).collect())
}

fn check_bounds(series: &[ForecastPeriod], required_slots: usize) -> Result<(), SlotError> {
    if required_slots == 0 {
        return Err(SlotError::InvalidDuration { required_slots });
    }
    if series.len() < required_slots {
        return Err(SlotError::InsufficientData {
            required: required_slots,
            available: series.len(),
        });
    }
    Ok(())
}
