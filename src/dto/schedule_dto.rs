use serde::{Deserialize, Serialize};
use validator::Validate;

use super::required;
use crate::models::NewSchedule;
use crate::utils::errors::AppResult;
use crate::utils::extract::empty_string_as_none;
use crate::utils::validation::normalize_time;

/// Frecuencia por defecto en minutos
pub const DEFAULT_FREQUENCY: i64 = 15;

/// Filtros del listado de horarios; se combinan con AND
#[derive(Debug, Default, Deserialize)]
pub struct ScheduleFilters {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub route_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub day_of_week: Option<String>,
}

// Request para crear un horario
#[derive(Debug, Deserialize, Validate)]
pub struct CreateScheduleRequest {
    #[validate(required)]
    pub route_id: Option<i64>,
    #[validate(required)]
    pub departure_station_id: Option<i64>,
    #[validate(required)]
    pub arrival_station_id: Option<i64>,
    #[validate(required)]
    pub departure_time: Option<String>,
    #[validate(required)]
    pub arrival_time: Option<String>,
    pub day_of_week: Option<String>,
    pub frequency: Option<i64>,
}

impl CreateScheduleRequest {
    /// Convertir a fila nueva. No se comprueba que la llegada sea posterior
    /// a la salida: eso lo hace el CHECK de la tabla.
    pub fn into_new_schedule(self) -> AppResult<NewSchedule> {
        let departure_time = required(self.departure_time, "departure_time")?;
        let arrival_time = required(self.arrival_time, "arrival_time")?;

        Ok(NewSchedule {
            route_id: required(self.route_id, "route_id")?,
            departure_station_id: required(self.departure_station_id, "departure_station_id")?,
            arrival_station_id: required(self.arrival_station_id, "arrival_station_id")?,
            departure_time: normalize_time("departure_time", &departure_time)?,
            arrival_time: normalize_time("arrival_time", &arrival_time)?,
            day_of_week: self.day_of_week,
            frequency: self.frequency.unwrap_or(DEFAULT_FREQUENCY),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ScheduleCreated {
    pub schedule_id: i64,
    pub message: String,
}

impl ScheduleCreated {
    pub fn new(schedule_id: i64) -> Self {
        Self {
            schedule_id,
            message: "Schedule created successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> CreateScheduleRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_frequency_defaults_to_fifteen() {
        let schedule = request(json!({
            "route_id": 1,
            "departure_station_id": 1,
            "arrival_station_id": 2,
            "departure_time": "08:00",
            "arrival_time": "08:45"
        }))
        .into_new_schedule()
        .unwrap();

        assert_eq!(schedule.frequency, DEFAULT_FREQUENCY);
        assert_eq!(schedule.departure_time, "08:00:00");
        assert_eq!(schedule.arrival_time, "08:45:00");
        assert_eq!(schedule.day_of_week, None);
    }

    #[test]
    fn test_missing_fields_fail_validation() {
        let req = request(json!({ "route_id": 1, "departure_time": "08:00" }));
        let err = req.validate().unwrap_err();
        let fields = err.field_errors();
        assert!(fields.contains_key("departure_station_id"));
        assert!(fields.contains_key("arrival_station_id"));
        assert!(fields.contains_key("arrival_time"));
        assert!(!fields.contains_key("route_id"));
    }

    #[test]
    fn test_arrival_before_departure_is_not_rejected_here() {
        let schedule = request(json!({
            "route_id": 1,
            "departure_station_id": 1,
            "arrival_station_id": 2,
            "departure_time": "09:00",
            "arrival_time": "08:00",
            "frequency": 30
        }))
        .into_new_schedule()
        .unwrap();

        assert_eq!(schedule.frequency, 30);
        assert!(schedule.arrival_time < schedule.departure_time);
    }
}
