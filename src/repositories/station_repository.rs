use sqlx::SqlitePool;

use crate::models::{NewStation, Station};
use crate::utils::errors::AppError;

// DECIMAL tiene afinidad NUMERIC: SQLite guarda 40.0 como entero, de ahí el CAST
const STATION_COLUMNS: &str = "station_id, station_name, station_type, \
    CAST(latitude AS REAL) AS latitude, CAST(longitude AS REAL) AS longitude, \
    address, created_at, updated_at";

pub struct StationRepository {
    pool: SqlitePool,
}

impl StationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Station>, AppError> {
        let stations = sqlx::query_as::<_, Station>(&format!(
            "SELECT {} FROM stations ORDER BY station_id",
            STATION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(stations)
    }

    pub async fn find_by_id(&self, station_id: i64) -> Result<Option<Station>, AppError> {
        let station = sqlx::query_as::<_, Station>(&format!(
            "SELECT {} FROM stations WHERE station_id = ?",
            STATION_COLUMNS
        ))
        .bind(station_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(station)
    }

    pub async fn create(&self, station: NewStation) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO stations (station_name, station_type, latitude, longitude, address)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(station.station_name)
        .bind(station.station_type)
        .bind(station.latitude)
        .bind(station.longitude)
        .bind(station.address)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}
