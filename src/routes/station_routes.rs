use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::StationController;
use crate::dto::station_dto::{CreateStationRequest, StationCreated};
use crate::dto::ApiResponse;
use crate::models::Station;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiPath, ValidatedJson};

pub fn create_station_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stations).post(create_station))
        .route("/:id", get(get_station))
}

async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Station>>>, AppError> {
    let controller = StationController::new(state.pool.clone());
    let stations = controller.list().await?;
    Ok(Json(ApiResponse::success(stations)))
}

async fn get_station(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ApiResponse<Station>>, AppError> {
    let controller = StationController::new(state.pool.clone());
    let station = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(station)))
}

async fn create_station(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateStationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StationCreated>>), AppError> {
    let controller = StationController::new(state.pool.clone());
    let created = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}
