use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::ScheduleController;
use crate::dto::schedule_dto::{CreateScheduleRequest, ScheduleCreated, ScheduleFilters};
use crate::dto::ApiResponse;
use crate::models::{ScheduleDelay, ScheduleView};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiPath, ApiQuery, ValidatedJson};

pub fn create_schedule_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schedules).post(create_schedule))
        .route("/:id", get(get_schedule))
        .route("/:id/delays", get(list_schedule_delays))
}

async fn list_schedules(
    State(state): State<AppState>,
    ApiQuery(filters): ApiQuery<ScheduleFilters>,
) -> Result<Json<ApiResponse<Vec<ScheduleView>>>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let schedules = controller.list(filters).await?;
    Ok(Json(ApiResponse::success(schedules)))
}

async fn get_schedule(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ApiResponse<ScheduleView>>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let schedule = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(schedule)))
}

async fn list_schedule_delays(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ApiResponse<Vec<ScheduleDelay>>>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let delays = controller.delays(id).await?;
    Ok(Json(ApiResponse::success(delays)))
}

async fn create_schedule(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateScheduleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ScheduleCreated>>), AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let created = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}
