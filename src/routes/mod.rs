//! Rutas HTTP
//! 
//! Un router por recurso, anidados bajo `/api`.

pub mod delay_routes;
pub mod health_routes;
pub mod route_routes;
pub mod schedule_routes;
pub mod search_routes;
pub mod station_routes;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Crear el router principal con todas las rutas y middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_routes::root))
        .route("/api", get(health_routes::api_info))
        .route("/api/health", get(health_routes::health_check))
        .nest("/api/routes", route_routes::create_route_router())
        .nest("/api/stations", station_routes::create_station_router())
        .nest("/api/schedules", schedule_routes::create_schedule_router())
        .nest("/api/delays", delay_routes::create_delay_router())
        .nest("/api/search", search_routes::create_search_router())
        .fallback(health_routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}
