use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::models::{NewReading, SensorReading};

/// Persistence capability used by the HTTP handlers.
///
/// Object-safe so tests can swap in in-memory fakes; the production
/// implementation is [`SqliteReadingStore`].
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Persist a reading and return its store-assigned id.
    async fn save(&self, reading: NewReading) -> Result<i64>;

    /// The reading with the maximum `recorded_at`, or `None` when empty.
    async fn latest(&self) -> Result<Option<SensorReading>>;

    /// Every stored reading, newest first. Relative order between readings
    /// with identical timestamps is store-dependent.
    async fn all(&self) -> Result<Vec<SensorReading>>;
}

pub struct SqliteReadingStore {
    pool: SqlitePool,
}

impl SqliteReadingStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadingStore for SqliteReadingStore {
    async fn save(&self, reading: NewReading) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO sensor_readings (soil_moisture, temperature, humidity, pump_status, recorded_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id
            "#,
        )
        .bind(reading.soil_moisture)
        .bind(reading.temperature)
        .bind(reading.humidity)
        .bind(reading.pump_status)
        .bind(reading.recorded_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn latest(&self) -> Result<Option<SensorReading>> {
        let row = sqlx::query_as::<_, SensorReading>(
            r#"
            SELECT id, soil_moisture, temperature, humidity, pump_status, recorded_at
            FROM sensor_readings
            ORDER BY recorded_at DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn all(&self) -> Result<Vec<SensorReading>> {
        let rows = sqlx::query_as::<_, SensorReading>(
            r#"
            SELECT id, soil_moisture, temperature, humidity, pump_status, recorded_at
            FROM sensor_readings
            ORDER BY recorded_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use sqlx::SqlitePool;

    use super::*;

    fn reading_at(recorded_at: DateTime<Utc>, soil_moisture: f64) -> NewReading {
        NewReading {
            soil_moisture,
            temperature: 21.0,
            humidity: 60.0,
            pump_status: None,
            recorded_at,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn save_assigns_increasing_ids(pool: SqlitePool) {
        let store = SqliteReadingStore::new(pool);
        let first = store.save(reading_at(Utc::now(), 10.0)).await.unwrap();
        let second = store.save(reading_at(Utc::now(), 11.0)).await.unwrap();
        assert!(second > first);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn latest_is_none_on_empty_store(pool: SqlitePool) {
        let store = SqliteReadingStore::new(pool);
        assert!(store.latest().await.unwrap().is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn latest_returns_max_timestamp_regardless_of_insert_order(pool: SqlitePool) {
        let store = SqliteReadingStore::new(pool);
        let base = Utc::now();

        store.save(reading_at(base, 10.0)).await.unwrap();
        store.save(reading_at(base + Duration::seconds(30), 30.0)).await.unwrap();
        store.save(reading_at(base + Duration::seconds(15), 20.0)).await.unwrap();

        let latest = store.latest().await.unwrap().unwrap();
        assert_eq!(latest.soil_moisture, 30.0);
        assert_eq!(latest.recorded_at, base + Duration::seconds(30));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn all_is_empty_on_empty_store(pool: SqlitePool) {
        let store = SqliteReadingStore::new(pool);
        assert!(store.all().await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn all_returns_newest_first(pool: SqlitePool) {
        let store = SqliteReadingStore::new(pool);
        let base = Utc::now();

        store.save(reading_at(base + Duration::seconds(10), 1.0)).await.unwrap();
        store.save(reading_at(base + Duration::seconds(30), 3.0)).await.unwrap();
        store.save(reading_at(base + Duration::seconds(20), 2.0)).await.unwrap();

        let rows = store.all().await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].soil_moisture, 3.0);
        assert_eq!(rows[1].soil_moisture, 2.0);
        assert_eq!(rows[2].soil_moisture, 1.0);
        assert!(rows.windows(2).all(|w| w[0].recorded_at >= w[1].recorded_at));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn pump_status_roundtrips_including_null(pool: SqlitePool) {
        let store = SqliteReadingStore::new(pool);
        let base = Utc::now();

        store.save(reading_at(base, 10.0)).await.unwrap();
        store
            .save(NewReading {
                pump_status: Some("ON".to_owned()),
                ..reading_at(base + Duration::seconds(5), 20.0)
            })
            .await
            .unwrap();

        let rows = store.all().await.unwrap();
        assert_eq!(rows[0].pump_status.as_deref(), Some("ON"));
        assert_eq!(rows[1].pump_status, None);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn timestamps_survive_the_roundtrip_exactly(pool: SqlitePool) {
        let store = SqliteReadingStore::new(pool);
        let recorded_at = "2026-07-01T06:30:15.250Z".parse::<DateTime<Utc>>().unwrap();

        store.save(reading_at(recorded_at, 42.5)).await.unwrap();

        let latest = store.latest().await.unwrap().unwrap();
        assert_eq!(latest.recorded_at, recorded_at);
    }
}
