//! HTTP client for the national grid carbon-intensity API.

use std::time::Duration;

use chrono::NaiveDateTime;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::slots::source::ForecastSource;
use crate::slots::types::{ForecastPeriod, PERIOD_TIME_LAYOUT};

/// Errors from the upstream forecast fetch.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    BuildClient(#[source] reqwest::Error),

    /// The request never produced a response (connect, timeout, transport).
    #[error("request to {url} failed: {source}")]
    Transport {
        /// The URL that was requested.
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered outside the 2xx range.
    #[error("upstream responded {status} for {url}")]
    Status {
        /// The non-2xx status code.
        status: StatusCode,
        /// The URL that was requested.
        url: String,
    },

    /// The response body was not the expected forecast envelope.
    #[error("failed to decode forecast payload from {url}: {source}")]
    Decode {
        /// The URL that was requested.
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Envelope the intensity API wraps its period list in.
#[derive(Debug, Deserialize)]
struct ForecastEnvelope {
    data: Vec<ForecastPeriod>,
}

/// Client for `GET {base_url}/intensity/{from}/fw24h`.
///
/// Transport and non-2xx failures are hard errors with no automatic
/// retry. The client-level timeout bounds every request, and dropping the
/// in-flight future (a disconnected caller) aborts the fetch.
#[derive(Debug, Clone)]
pub struct CarbonIntensityApi {
    client: reqwest::Client,
    base_url: String,
}

impl CarbonIntensityApi {
    /// Builds a client for `base_url` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::BuildClient`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(UpstreamError::BuildClient)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }
}

impl ForecastSource for CarbonIntensityApi {
    fn forecast_from(
        &self,
        anchor: NaiveDateTime,
    ) -> impl Future<Output = Result<Vec<ForecastPeriod>, UpstreamError>> + Send {
        async move {
            let url = format!(
                "{}/intensity/{}/fw24h",
                self.base_url,
                anchor.format(PERIOD_TIME_LAYOUT)
            );
            debug!(%url, "fetching intensity forecast");

            let response = self
                .client
                .get(&url)
                .header(reqwest::header::ACCEPT, "application/json")
                .send()
                .await
                .map_err(|source| UpstreamError::Transport {
                    url: url.clone(),
                    source,
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(UpstreamError::Status { status, url });
            }

            let envelope: ForecastEnvelope = response
                .json()
                .await
                .map_err(|source| UpstreamError::Decode { url, source })?;

            Ok(envelope.data)
        }
    }
}
