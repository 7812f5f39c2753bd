use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::dto::api_response::MessageResponse;
use crate::dto::delay_dto::{CreateDelayRequest, DelayCreated, DelayFilters, UpdateDelayRequest};
use crate::models::{DelayDetail, DelayListItem};
use crate::repositories::DelayRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct DelayController {
    repository: DelayRepository,
}

impl DelayController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: DelayRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: DelayFilters) -> Result<Vec<DelayListItem>, AppError> {
        self.repository
            .find_filtered(filters.active_flag(), filters.route_id)
            .await
    }

    pub async fn get_by_id(&self, delay_id: i64) -> Result<DelayDetail, AppError> {
        self.repository
            .find_by_id(delay_id)
            .await?
            .ok_or_else(|| not_found_error("Delay", delay_id))
    }

    pub async fn create(&self, request: CreateDelayRequest) -> Result<DelayCreated, AppError> {
        let delay = request.into_new_delay()?;
        let delay_id = self.repository.create(delay).await?;

        info!("⏱️ Retraso reportado con id {}", delay_id);
        Ok(DelayCreated::new(delay_id))
    }

    /// Sin la clave `is_active` en el cuerpo no se toca nada y la respuesta es
    /// igualmente correcta; con `null` se resuelve.
    /// Un id inexistente tampoco es un error: el UPDATE simplemente no afecta filas.
    pub async fn update(
        &self,
        delay_id: i64,
        request: UpdateDelayRequest,
    ) -> Result<MessageResponse, AppError> {
        match request.requested_state() {
            Some(is_active) => {
                let affected = self.repository.set_active(delay_id, is_active).await?;
                info!(
                    "⏱️ Retraso {} -> is_active={} ({} filas)",
                    delay_id, is_active, affected
                );
            }
            None => debug!("PUT sobre retraso {} sin is_active, nada que hacer", delay_id),
        }

        Ok(MessageResponse::new("Delay updated successfully"))
    }
}
