//! Utilidades de validación
//! 
//! Funciones helper para validación de datos y conversión de tipos.

use chrono::NaiveTime;
use validator::{ValidationError, ValidationErrors};

use super::errors::{AppError, AppResult};

/// Formato canónico con el que se guardan las horas
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Validar y convertir string a hora del día (`HH:MM:SS` o `HH:MM`)
pub fn validate_time(value: &str) -> Result<NaiveTime, ValidationError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| {
            let mut error = ValidationError::new("time");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"HH:MM:SS".to_string());
            error
        })
}

/// Normalizar una hora a `HH:MM:SS` para que la restricción CHECK compare
/// textos con el mismo formato.
pub fn normalize_time(field: &str, value: &str) -> AppResult<String> {
    validate_time(value)
        .map(|time| time.format(TIME_FORMAT).to_string())
        .map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid {}: '{}' (expected HH:MM or HH:MM:SS)",
                field, value
            ))
        })
}

/// Mensaje para errores de validación. Si todos son campos obligatorios
/// ausentes se listan por nombre, ordenados.
pub fn missing_fields_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let all_required = !field_errors.is_empty()
        && field_errors
            .values()
            .all(|errs| errs.iter().all(|e| e.code == "required"));

    if !all_required {
        return errors.to_string();
    }

    let mut fields: Vec<&str> = field_errors.keys().copied().collect();
    fields.sort_unstable();

    if fields.len() == 1 {
        format!("Missing required field: {}", fields[0])
    } else {
        format!("Missing required fields: {}", fields.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_time_accepts_both_formats() {
        assert_eq!(
            validate_time("08:30").unwrap(),
            NaiveTime::from_hms_opt(8, 30, 0).unwrap()
        );
        assert_eq!(
            validate_time("23:59:59").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 59).unwrap()
        );
        assert!(validate_time("8h30").is_err());
        assert!(validate_time("25:00").is_err());
    }

    #[test]
    fn test_normalize_time() {
        assert_eq!(normalize_time("departure_time", "07:05").unwrap(), "07:05:00");
        assert_eq!(normalize_time("departure_time", " 07:05:09 ").unwrap(), "07:05:09");

        let err = normalize_time("arrival_time", "later").unwrap_err();
        assert!(err.to_string().contains("arrival_time"));
    }

    #[test]
    fn test_single_missing_field_message() {
        let mut errors = ValidationErrors::new();
        errors.add("station_name", ValidationError::new("required"));
        assert_eq!(
            missing_fields_message(&errors),
            "Missing required field: station_name"
        );
    }

    #[test]
    fn test_other_validation_errors_use_default_text() {
        let mut errors = ValidationErrors::new();
        errors.add("route_name", ValidationError::new("length"));
        assert!(!missing_fields_message(&errors).starts_with("Missing"));
    }
}
