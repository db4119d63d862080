use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub weather: WeatherConfig,
}

/// Settings for the upstream weather provider.
///
/// The query shape (location, horizon, air quality) is fixed per deployment;
/// changing it is a configuration matter and never touches the proxy logic.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: String,
    pub base_url: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Forecast horizon in days.
    pub forecast_days: u8,
    /// Whether to request air-quality data from the provider.
    pub include_air_quality: bool,
    /// Upstream request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            server_host: optional("SERVER_HOST", "0.0.0.0"),
            server_port: optional("SERVER_PORT", "8080")
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            weather: WeatherConfig {
                api_key: required("WEATHER_API_KEY")?,
                base_url: optional("WEATHER_BASE_URL", "https://api.weatherapi.com/v1"),
                latitude: optional("WEATHER_LATITUDE", "27.7167")
                    .parse()
                    .context("WEATHER_LATITUDE must be a decimal degree value")?,
                longitude: optional("WEATHER_LONGITUDE", "85.3167")
                    .parse()
                    .context("WEATHER_LONGITUDE must be a decimal degree value")?,
                forecast_days: parse_forecast_days(&optional("WEATHER_FORECAST_DAYS", "5"))?,
                include_air_quality: optional("WEATHER_INCLUDE_AQI", "false")
                    .parse()
                    .context("WEATHER_INCLUDE_AQI must be true or false")?,
                request_timeout_secs: parse_timeout_secs(&optional("WEATHER_TIMEOUT_SECS", "10"))?,
            },
        })
    }
}

/// Parse and validate the forecast horizon. The provider serves at most
/// 14 days; a zero-day forecast is meaningless.
fn parse_forecast_days(raw: &str) -> Result<u8> {
    let days: u8 = raw
        .parse()
        .with_context(|| format!("WEATHER_FORECAST_DAYS must be an integer, got: {raw:?}"))?;
    if !(1..=14).contains(&days) {
        anyhow::bail!("WEATHER_FORECAST_DAYS must be between 1 and 14, got: {days}");
    }
    Ok(days)
}

/// Parse and validate the upstream timeout. A zero timeout would fail
/// every forecast call before it starts.
fn parse_timeout_secs(raw: &str) -> Result<u64> {
    let secs: u64 = raw
        .parse()
        .with_context(|| format!("WEATHER_TIMEOUT_SECS must be an integer, got: {raw:?}"))?;
    if secs == 0 {
        anyhow::bail!("WEATHER_TIMEOUT_SECS must be at least 1, got: 0");
    }
    Ok(secs)
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("missing required env var: {key}"))
}

fn optional(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
