//! Integration tests for the recommendation engine over fixture sources.

mod common;

use carbon_slots::error::SlotError;
use carbon_slots::slots::engine::SlotEngine;

use common::{FailingSource, FixtureSource, series_of};

fn engine_over(forecasts: &[i64]) -> SlotEngine<FixtureSource> {
    SlotEngine::new(FixtureSource::new(series_of(forecasts)), 30)
}

#[tokio::test]
async fn continuous_hour_picks_the_lowest_window() {
    let engine = engine_over(&[60, 80, 90, 80]);
    let rec = engine.recommend(60, true).await.unwrap();

    assert_eq!(rec.average_forecast, 70);
    assert_eq!(rec.slots.len(), 2);
    assert_eq!(rec.slots[0].from, "2024-01-20T12:00Z");
    assert_eq!(rec.slots[1].from, "2024-01-20T12:30Z");
    assert_eq!(rec.slots[1].to, "2024-01-20T13:00Z");
}

#[tokio::test]
async fn continuous_partial_duration_weights_and_trims_the_tail() {
    let engine = engine_over(&[60, 80, 90, 80]);
    let rec = engine.recommend(45, true).await.unwrap();

    // (60 * 30 + 80 * 15) / 45 = 66, and the window ends 45 minutes in.
    assert_eq!(rec.average_forecast, 66);
    assert_eq!(rec.slots.len(), 2);
    assert_eq!(rec.slots[0].to, "2024-01-20T12:30Z");
    assert_eq!(rec.slots[1].to, "2024-01-20T12:45Z");
    // Per-slot forecasts stay unweighted.
    assert_eq!(rec.slots[1].intensity.forecast, 80);
}

#[tokio::test]
async fn non_continuous_picks_global_minimums() {
    let engine = engine_over(&[30, 10, 20, 40]);
    let rec = engine.recommend(60, false).await.unwrap();

    assert_eq!(rec.average_forecast, 15);
    let forecasts: Vec<i64> = rec.slots.iter().map(|s| s.intensity.forecast).collect();
    assert_eq!(forecasts, vec![10, 20]);
    // Presented chronologically, not in forecast order.
    assert!(rec.slots[0].from < rec.slots[1].from);
}

#[tokio::test]
async fn slot_count_is_ceiling_of_duration_over_width() {
    let engine = engine_over(&[50, 40, 30, 20, 10, 60]);

    for (duration, expected_slots) in [(30, 1), (31, 2), (60, 2), (90, 3), (150, 5)] {
        let rec = engine.recommend(duration, false).await.unwrap();
        assert_eq!(
            rec.slots.len(),
            expected_slots,
            "duration {duration} should span {expected_slots} slots"
        );
    }
}

#[tokio::test]
async fn full_horizon_request_uses_every_period() {
    let forecasts: Vec<i64> = (0..48).map(|i| 100 + i).collect();
    let engine = engine_over(&forecasts);
    let rec = engine.recommend(1440, true).await.unwrap();

    assert_eq!(rec.slots.len(), 48);
    // Mean of 100..=147, floor-divided.
    assert_eq!(rec.average_forecast, 123);
}

#[tokio::test]
async fn continuous_tie_keeps_the_first_window() {
    let engine = engine_over(&[50, 50, 50, 50]);
    let rec = engine.recommend(60, true).await.unwrap();
    assert_eq!(rec.slots[0].from, "2024-01-20T12:00Z");
}

#[tokio::test]
async fn insufficient_data_fails_without_partial_result() {
    let engine = engine_over(&[60, 80]);
    let err = engine.recommend(240, true).await.unwrap_err();
    assert!(matches!(
        err,
        SlotError::InsufficientData {
            required: 8,
            available: 2,
        }
    ));
}

#[tokio::test]
async fn zero_duration_is_rejected_before_selection() {
    let engine = engine_over(&[60, 80]);
    let err = engine.recommend(0, true).await.unwrap_err();
    assert!(matches!(err, SlotError::InvalidDuration { .. }));
}

#[tokio::test]
async fn upstream_failure_propagates_with_context() {
    let engine = SlotEngine::new(FailingSource, 30);
    let err = engine.recommend(60, true).await.unwrap_err();

    assert!(matches!(err, SlotError::Upstream(_)));
    let text = err.to_string();
    assert!(text.contains("failed to fetch carbon intensity forecast"));
    assert!(text.contains("502"));
}

#[tokio::test]
async fn malformed_timestamp_in_chosen_slot_fails_shaping() {
    let mut series = series_of(&[60, 80]);
    series[1].from = "half past noon".to_string();
    let engine = SlotEngine::new(FixtureSource::new(series), 30);

    let err = engine.recommend(45, true).await.unwrap_err();
    assert!(matches!(err, SlotError::TimeParse { .. }));
}
