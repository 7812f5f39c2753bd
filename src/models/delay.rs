//! Modelo de Delay
//! 
//! Un retraso está activo hasta que se resuelve; al resolverse se sella
//! `resolved_at` y al reactivarse se limpia.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fila del listado de retrasos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DelayListItem {
    pub delay_id: i64,
    pub schedule_id: i64,
    pub route_name: String,
    pub departure_time: String,
    pub delay_minutes: i64,
    pub reason: Option<String>,
    pub reported_at: Option<NaiveDateTime>,
    pub is_active: bool,
}

/// Retraso individual con su estado de resolución
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DelayDetail {
    pub delay_id: i64,
    pub schedule_id: i64,
    pub route_name: String,
    pub delay_minutes: i64,
    pub reason: Option<String>,
    pub reported_at: Option<NaiveDateTime>,
    pub is_active: bool,
    pub resolved_at: Option<NaiveDateTime>,
}

/// Retrasos de un horario concreto
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScheduleDelay {
    pub delay_id: i64,
    pub delay_minutes: i64,
    pub reason: Option<String>,
    pub reported_at: Option<NaiveDateTime>,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct NewDelay {
    pub schedule_id: i64,
    pub delay_minutes: i64,
    pub reason: Option<String>,
}
