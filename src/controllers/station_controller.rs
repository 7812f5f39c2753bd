use sqlx::SqlitePool;
use tracing::info;

use crate::dto::station_dto::{CreateStationRequest, StationCreated};
use crate::models::Station;
use crate::repositories::StationRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct StationController {
    repository: StationRepository,
}

impl StationController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: StationRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Station>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, station_id: i64) -> Result<Station, AppError> {
        self.repository
            .find_by_id(station_id)
            .await?
            .ok_or_else(|| not_found_error("Station", station_id))
    }

    pub async fn create(&self, request: CreateStationRequest) -> Result<StationCreated, AppError> {
        let station = request.into_new_station()?;
        let station_id = self.repository.create(station).await?;

        info!("🚉 Estación creada con id {}", station_id);
        Ok(StationCreated::new(station_id))
    }
}
