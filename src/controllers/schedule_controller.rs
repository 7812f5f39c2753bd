use sqlx::SqlitePool;
use tracing::info;

use crate::dto::schedule_dto::{CreateScheduleRequest, ScheduleCreated, ScheduleFilters};
use crate::models::{ScheduleDelay, ScheduleView};
use crate::repositories::{DelayRepository, ScheduleRepository};
use crate::utils::errors::{not_found_error, AppError};

pub struct ScheduleController {
    repository: ScheduleRepository,
    delays: DelayRepository,
}

impl ScheduleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ScheduleRepository::new(pool.clone()),
            delays: DelayRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: ScheduleFilters) -> Result<Vec<ScheduleView>, AppError> {
        self.repository
            .find_filtered(filters.route_id, filters.day_of_week)
            .await
    }

    pub async fn get_by_id(&self, schedule_id: i64) -> Result<ScheduleView, AppError> {
        self.repository
            .find_by_id(schedule_id)
            .await?
            .ok_or_else(|| not_found_error("Schedule", schedule_id))
    }

    pub async fn delays(&self, schedule_id: i64) -> Result<Vec<ScheduleDelay>, AppError> {
        self.delays.find_by_schedule(schedule_id).await
    }

    pub async fn create(&self, request: CreateScheduleRequest) -> Result<ScheduleCreated, AppError> {
        let schedule = request.into_new_schedule()?;
        let schedule_id = self.repository.create(schedule).await?;

        info!("🕒 Horario creado con id {}", schedule_id);
        Ok(ScheduleCreated::new(schedule_id))
    }
}
