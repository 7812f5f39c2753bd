use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::RouteController;
use crate::dto::route_dto::{CreateRouteRequest, RouteCreated};
use crate::dto::ApiResponse;
use crate::models::{Route, ScheduleView};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiPath, ValidatedJson};

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_routes).post(create_route))
        .route("/:id", get(get_route))
        .route("/:id/schedules", get(list_route_schedules))
}

async fn list_routes(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Route>>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let routes = controller.list().await?;
    Ok(Json(ApiResponse::success(routes)))
}

async fn get_route(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ApiResponse<Route>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let route = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(route)))
}

async fn list_route_schedules(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ApiResponse<Vec<ScheduleView>>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let schedules = controller.schedules(id).await?;
    Ok(Json(ApiResponse::success(schedules)))
}

async fn create_route(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateRouteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RouteCreated>>), AppError> {
    let controller = RouteController::new(state.pool.clone());
    let created = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}
