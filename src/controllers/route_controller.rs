use sqlx::SqlitePool;
use tracing::info;

use crate::dto::route_dto::{CreateRouteRequest, RouteCreated};
use crate::models::{Route, ScheduleView};
use crate::repositories::{RouteRepository, ScheduleRepository};
use crate::utils::errors::{not_found_error, AppError};

pub struct RouteController {
    repository: RouteRepository,
    schedules: ScheduleRepository,
}

impl RouteController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: RouteRepository::new(pool.clone()),
            schedules: ScheduleRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Route>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, route_id: i64) -> Result<Route, AppError> {
        self.repository
            .find_by_id(route_id)
            .await?
            .ok_or_else(|| not_found_error("Route", route_id))
    }

    /// Horarios de una ruta; una ruta sin horarios (o inexistente) da lista vacía
    pub async fn schedules(&self, route_id: i64) -> Result<Vec<ScheduleView>, AppError> {
        self.schedules.find_by_route(route_id).await
    }

    pub async fn create(&self, request: CreateRouteRequest) -> Result<RouteCreated, AppError> {
        let route = request.into_new_route()?;
        let route_id = self.repository.create(route).await?;

        info!("🚌 Ruta creada con id {}", route_id);
        Ok(RouteCreated::new(route_id))
    }
}
