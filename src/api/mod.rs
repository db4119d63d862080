pub mod dto;
pub mod errors;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::{db::store::ReadingStore, weather::WeatherClient};
use handlers::ApiDoc;

/// Dependencies shared by all handlers. The store is a trait object so tests
/// can substitute fakes for the SQLite implementation.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReadingStore>,
    pub weather: WeatherClient,
}

pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .route("/api/sensor/data", post(handlers::submit_reading))
        .route("/api/sensor/latest", get(handlers::get_latest))
        .route("/api/sensor/all", get(handlers::get_all))
        .route("/api/weather/forecast", get(handlers::get_forecast))
        .with_state(state)
        .split_for_parts();

    router
        .route("/health", get(handlers::health))
        .route(
            "/api-docs/openapi.json",
            get(move || async move { axum::Json(api) }),
        )
        // Dashboards are served from arbitrary origins.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
