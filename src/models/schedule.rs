//! Modelo de Schedule
//! 
//! Las consultas de horarios siempre hacen JOIN con la ruta y con las dos
//! estaciones, así que aquí sólo hay vistas con nombres legibles.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Horario con nombre de ruta y de estaciones
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScheduleView {
    pub schedule_id: i64,
    pub route_id: i64,
    pub route_name: String,
    pub departure_station: String,
    pub arrival_station: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub day_of_week: Option<String>,
    pub frequency: Option<i64>,
}

/// Resultado de búsqueda: la misma vista sin día ni frecuencia
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScheduleMatch {
    pub schedule_id: i64,
    pub route_id: i64,
    pub route_name: String,
    pub departure_station: String,
    pub arrival_station: String,
    pub departure_time: String,
    pub arrival_time: String,
}

/// Datos para insertar un horario; las horas ya vienen normalizadas a `HH:MM:SS`
#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub route_id: i64,
    pub departure_station_id: i64,
    pub arrival_station_id: i64,
    pub departure_time: String,
    pub arrival_time: String,
    pub day_of_week: Option<String>,
    pub frequency: i64,
}
