//! Endpoints de servicio: banner raíz, health check, directorio de la API
//! y respuesta para rutas desconocidas.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use tracing::error;

use crate::database;
use crate::state::AppState;
use crate::utils::errors::{AppError, ENDPOINT_NOT_FOUND};

pub const SERVICE_NAME: &str = "Public Transport Tracker API";
pub const SERVICE_ID: &str = "public-transport-tracker-api";
pub const API_VERSION: &str = "1.0.0";

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "message": "Service is running. Use /api endpoints for data."
    }))
}

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true);

    match database::ping(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "service": SERVICE_ID,
                "timestamp": timestamp,
                "database": "connected"
            })),
        ),
        Err(e) => {
            error!("❌ Health check fallido: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "unhealthy",
                    "service": SERVICE_ID,
                    "timestamp": timestamp,
                    "error": e.to_string()
                })),
            )
        }
    }
}

/// GET /api
pub async fn api_info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": API_VERSION,
        "environment": state.config.environment,
        "database": "SQLite",
        "endpoints": {
            "routes": "/api/routes",
            "stations": "/api/stations",
            "schedules": "/api/schedules",
            "delays": "/api/delays",
            "search": "/api/search",
            "health": "/api/health"
        }
    }))
}

/// Fallback para cualquier ruta sin handler
pub async fn not_found() -> impl IntoResponse {
    AppError::NotFound(ENDPOINT_NOT_FOUND.to_string())
}
