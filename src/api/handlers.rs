use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::info;
use utoipa::OpenApi;

use super::{
    dto::{NewReadingRequest, SensorReadingDto},
    errors::ApiError,
    AppState,
};
use crate::db::models::NewReading;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Store one sensor reading. The id and timestamp are assigned server side,
/// so any values the client sends for them are ignored.
#[utoipa::path(
    post,
    path = "/api/sensor/data",
    request_body = NewReadingRequest,
    responses(
        (status = 200, description = "Reading stored", body = String),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Reading could not be persisted"),
    ),
    tag = "sensor"
)]
pub async fn submit_reading(
    State(state): State<AppState>,
    payload: Result<Json<NewReadingRequest>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Json(request) = payload?;
    let reading = NewReading {
        soil_moisture: request.soil_moisture,
        temperature: request.temperature,
        humidity: request.humidity,
        pump_status: request.pump_status,
        recorded_at: Utc::now(),
    };
    let id = state.store.save(reading).await?;
    info!(id, "Sensor reading stored");
    Ok("Data received")
}

/// Fetch the most recent reading, or JSON `null` when none has been stored.
#[utoipa::path(
    get,
    path = "/api/sensor/latest",
    responses(
        (status = 200, description = "Most recent reading, or null when the store is empty", body = SensorReadingDto),
        (status = 500, description = "Internal server error"),
    ),
    tag = "sensor"
)]
pub async fn get_latest(
    State(state): State<AppState>,
) -> Result<Json<Option<SensorReadingDto>>, ApiError> {
    let latest = state.store.latest().await?;
    Ok(Json(latest.map(Into::into)))
}

/// Fetch every stored reading, newest first.
#[utoipa::path(
    get,
    path = "/api/sensor/all",
    responses(
        (status = 200, description = "All readings, newest first", body = Vec<SensorReadingDto>),
        (status = 500, description = "Internal server error"),
    ),
    tag = "sensor"
)]
pub async fn get_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<SensorReadingDto>>, ApiError> {
    let readings = state.store.all().await?;
    Ok(Json(readings.into_iter().map(Into::into).collect()))
}

/// Relay the upstream forecast payload without reshaping it, so dashboard
/// code can consume the provider's schema directly.
#[utoipa::path(
    get,
    path = "/api/weather/forecast",
    responses(
        (status = 200, description = "Upstream forecast document, relayed verbatim"),
        (status = 500, description = "Upstream request failed"),
    ),
    tag = "weather"
)]
pub async fn get_forecast(State(state): State<AppState>) -> Result<Response, ApiError> {
    let body: Bytes = state.weather.forecast().await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Liveness probe; replies `{"status":"ok"}` while the process is serving.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "system"
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// OpenAPI spec struct (used in api/mod.rs)
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(submit_reading, get_latest, get_all, get_forecast, health),
    components(schemas(NewReadingRequest, SensorReadingDto)),
    tags(
        (name = "sensor", description = "Soil sensor ingestion and history"),
        (name = "weather", description = "Weather forecast proxy"),
        (name = "system", description = "Service health"),
    ),
    info(
        title = "Soil Monitor API",
        version = "0.1.0",
        description = "REST API for soil telemetry ingestion and weather forecasts"
    )
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
