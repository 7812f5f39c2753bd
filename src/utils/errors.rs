//! Sistema de manejo de errores
//! 
//! Este módulo define los tipos de errores del sistema y su conversión a
//! respuestas HTTP con el sobre `{"status":"error","message":...}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use super::validation::missing_fields_message;

/// Mensaje para cualquier ruta que no existe
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Cualquier fallo del motor, incluidas las violaciones de restricciones
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{}", missing_fields_message(.0))]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Cuerpo de error para la API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!("❌ {}: {}", status, message);
        } else {
            warn!("⚠️ {}: {}", status, message);
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{} {} not found", resource, id))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn test_status_codes() {
        assert_eq!(not_found_error("Route", 3).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(bad_request_error("nope").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(not_found_error("Schedule", 42).to_string(), "Schedule 42 not found");
    }

    #[test]
    fn test_validation_message_lists_missing_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("route_type", ValidationError::new("required"));
        errors.add("end_station", ValidationError::new("required"));

        let err = AppError::Validation(errors);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing required fields: end_station, route_type");
    }

    #[test]
    fn test_database_error_text_is_passed_through() {
        let err = AppError::Database(sqlx::Error::Protocol("CHECK constraint failed".to_string()));
        assert!(err.to_string().contains("CHECK constraint failed"));
    }
}
