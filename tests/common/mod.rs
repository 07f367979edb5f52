//! Shared test fixtures for integration tests.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use carbon_slots::slots::source::ForecastSource;
use carbon_slots::slots::types::{ForecastPeriod, Intensity, format_period_time};
use carbon_slots::upstream::UpstreamError;

/// Builds one period with the given bounds and forecast.
pub fn period(from: &str, to: &str, forecast: i64) -> ForecastPeriod {
    ForecastPeriod {
        from: from.to_string(),
        to: to.to_string(),
        intensity: Intensity {
            forecast,
            actual: None,
            index: "moderate".to_string(),
        },
    }
}

/// Builds a contiguous series of 30-minute periods starting at
/// `2024-01-20T12:00Z`, one per forecast value.
pub fn series_of(forecasts: &[i64]) -> Vec<ForecastPeriod> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 20)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    forecasts
        .iter()
        .enumerate()
        .map(|(i, &forecast)| {
            let from = start + Duration::minutes(30 * i as i64);
            let to = from + Duration::minutes(30);
            period(&format_period_time(from), &format_period_time(to), forecast)
        })
        .collect()
}

/// Deterministic in-memory forecast source.
pub struct FixtureSource {
    periods: Vec<ForecastPeriod>,
}

impl FixtureSource {
    pub fn new(periods: Vec<ForecastPeriod>) -> Self {
        Self { periods }
    }
}

impl ForecastSource for FixtureSource {
    fn forecast_from(
        &self,
        _anchor: NaiveDateTime,
    ) -> impl Future<Output = Result<Vec<ForecastPeriod>, UpstreamError>> + Send {
        let periods = self.periods.clone();
        async move { Ok(periods) }
    }
}

/// Source that always fails with an upstream status error.
pub struct FailingSource;

impl ForecastSource for FailingSource {
    fn forecast_from(
        &self,
        _anchor: NaiveDateTime,
    ) -> impl Future<Output = Result<Vec<ForecastPeriod>, UpstreamError>> + Send {
        async move {
            Err(UpstreamError::Status {
                status: reqwest::StatusCode::BAD_GATEWAY,
                url: "http://intensity.test/intensity/now/fw24h".to_string(),
            })
        }
    }
}
