use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::DelayController;
use crate::dto::api_response::MessageResponse;
use crate::dto::delay_dto::{CreateDelayRequest, DelayCreated, DelayFilters, UpdateDelayRequest};
use crate::dto::ApiResponse;
use crate::models::{DelayDetail, DelayListItem};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiPath, ApiQuery, ValidatedJson};

pub fn create_delay_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_delays).post(create_delay))
        .route("/:id", get(get_delay).put(update_delay))
}

async fn list_delays(
    State(state): State<AppState>,
    ApiQuery(filters): ApiQuery<DelayFilters>,
) -> Result<Json<ApiResponse<Vec<DelayListItem>>>, AppError> {
    let controller = DelayController::new(state.pool.clone());
    let delays = controller.list(filters).await?;
    Ok(Json(ApiResponse::success(delays)))
}

async fn get_delay(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ApiResponse<DelayDetail>>, AppError> {
    let controller = DelayController::new(state.pool.clone());
    let delay = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(delay)))
}

async fn create_delay(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateDelayRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DelayCreated>>), AppError> {
    let controller = DelayController::new(state.pool.clone());
    let created = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

async fn update_delay(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateDelayRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    let controller = DelayController::new(state.pool.clone());
    let updated = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success(updated)))
}
