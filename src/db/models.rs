use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted set of soil/environment measurements.
///
/// Rows are immutable once inserted: there are no update or delete paths,
/// and `recorded_at` is always the server's receipt time.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SensorReading {
    pub id: i64,
    /// Volumetric soil moisture, percent.
    pub soil_moisture: f64,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity percentage.
    pub humidity: f64,
    /// Free-text pump state reported by the device, absent on older rows.
    pub pump_status: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Insert input for a reading. `recorded_at` is assigned by the server
/// before the store sees it; the store assigns `id`.
#[derive(Debug, Clone)]
pub struct NewReading {
    pub soil_moisture: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub pump_status: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
