use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/sensor/data`.
///
/// Client-supplied `id` or `timestamp` fields are ignored: the server is the
/// sole authority on both. Measurements are accepted as-is; range checking
/// is a device concern.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewReadingRequest {
    pub soil_moisture: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub pump_status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SensorReadingDto {
    pub id: i64,
    /// Volumetric soil moisture, percent.
    pub soil_moisture: f64,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity percentage.
    pub humidity: f64,
    pub pump_status: Option<String>,
    /// Server receipt time, RFC 3339.
    pub timestamp: DateTime<Utc>,
}

impl From<crate::db::models::SensorReading> for SensorReadingDto {
    fn from(r: crate::db::models::SensorReading) -> Self {
        Self {
            id: r.id,
            soil_moisture: r.soil_moisture,
            temperature: r.temperature,
            humidity: r.humidity,
            pump_status: r.pump_status,
            timestamp: r.recorded_at,
        }
    }
}
