use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

use crate::weather::WeatherError;

/// Handler failure taxonomy. Each variant maps to exactly one externally
/// visible outcome; none is retried or masked into another kind.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unparseable or mistyped request body, rejected at the boundary.
    #[error("invalid request body: {0}")]
    BadRequest(#[from] JsonRejection),
    /// Upstream weather failure. Callers get one generic payload; the
    /// specific cause is only logged.
    #[error(transparent)]
    WeatherUpstream(#[from] WeatherError),
    /// Persistence or other internal failure.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(rejection) => {
                debug!(error = %rejection, "Rejected malformed request body");
                let status = rejection.status();
                (status, Json(json!({ "error": rejection.body_text() }))).into_response()
            }
            ApiError::WeatherUpstream(err) => {
                error!(error = %err, "Weather forecast fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch weather data" })),
                )
                    .into_response()
            }
            ApiError::Internal(err) => {
                error!(error = %err, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
