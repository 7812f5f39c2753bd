//! Esquemas de petición y respuesta por endpoint

pub mod api_response;
pub mod delay_dto;
pub mod route_dto;
pub mod schedule_dto;
pub mod search_dto;
pub mod station_dto;

pub use api_response::ApiResponse;

use validator::{ValidationError, ValidationErrors};

use crate::utils::errors::{AppError, AppResult};

/// Extraer un campo obligatorio ya validado
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> AppResult<T> {
    value.ok_or_else(|| {
        let mut errors = ValidationErrors::new();
        errors.add(field, ValidationError::new("required"));
        AppError::Validation(errors)
    })
}
