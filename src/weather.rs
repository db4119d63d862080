use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::config::WeatherConfig;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection, TLS, or timeout failure before a response arrived.
    #[error("weather provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("weather provider returned status {0}")]
    Status(StatusCode),
}

/// Thin client for the upstream forecast API.
///
/// The response body is opaque to this service: it is relayed to callers
/// byte for byte, never parsed or reshaped. There is no caching and no
/// retrying; every call is a fresh upstream request bounded by the
/// configured timeout.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    http: Client,
    base_url: String,
    api_key: String,
    location: String,
    forecast_days: u8,
    include_air_quality: bool,
}

impl WeatherClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url: config.base_url.trim_end_matches('/').to_owned(),
                api_key: config.api_key.clone(),
                location: format!("{},{}", config.latitude, config.longitude),
                forecast_days: config.forecast_days,
                include_air_quality: config.include_air_quality,
            }),
        })
    }

    /// Fetch the forecast for the configured location and horizon, returning
    /// the raw upstream body.
    pub async fn forecast(&self) -> Result<Bytes, WeatherError> {
        let url = format!("{}/forecast.json", self.inner.base_url);
        // The key travels only as a query parameter; keep it out of the logs.
        debug!(endpoint = %url, "Fetching weather forecast");

        let response = self
            .inner
            .http
            .get(&url)
            .query(&forecast_params(
                &self.inner.api_key,
                &self.inner.location,
                self.inner.forecast_days,
                self.inner.include_air_quality,
            ))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status));
        }

        let bytes = response.bytes().await?;
        debug!(bytes = bytes.len(), "Weather forecast fetched");
        Ok(bytes)
    }
}

/// Query parameters for the provider's `forecast.json` endpoint.
fn forecast_params(
    api_key: &str,
    location: &str,
    forecast_days: u8,
    include_air_quality: bool,
) -> [(&'static str, String); 4] {
    [
        ("key", api_key.to_owned()),
        ("q", location.to_owned()),
        ("days", forecast_days.to_string()),
        ("aqi", if include_air_quality { "yes" } else { "no" }.to_owned()),
    ]
}
