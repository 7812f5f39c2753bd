use serde::{Deserialize, Serialize};
use validator::Validate;

use super::required;
use crate::models::NewDelay;
use crate::utils::errors::AppResult;
use crate::utils::extract::{empty_string_as_none, present_or_null};

/// Filtros del listado de retrasos
#[derive(Debug, Default, Deserialize)]
pub struct DelayFilters {
    pub is_active: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub route_id: Option<i64>,
}

impl DelayFilters {
    /// Sin parámetro se listan los activos; cualquier valor distinto de
    /// `true` (sin distinguir mayúsculas) lista los inactivos.
    pub fn active_flag(&self) -> bool {
        self.is_active
            .as_deref()
            .map_or(true, |value| value.eq_ignore_ascii_case("true"))
    }
}

// Request para reportar un retraso
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDelayRequest {
    #[validate(required)]
    pub schedule_id: Option<i64>,
    #[validate(required)]
    pub delay_minutes: Option<i64>,
    pub reason: Option<String>,
}

impl CreateDelayRequest {
    pub fn into_new_delay(self) -> AppResult<NewDelay> {
        Ok(NewDelay {
            schedule_id: required(self.schedule_id, "schedule_id")?,
            delay_minutes: required(self.delay_minutes, "delay_minutes")?,
            reason: self.reason,
        })
    }
}

/// Cuerpo parcial del PUT; sólo se mira `is_active`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateDelayRequest {
    #[serde(default, deserialize_with = "present_or_null")]
    pub is_active: Option<Option<bool>>,
}

impl UpdateDelayRequest {
    /// Estado pedido si la clave viene en el cuerpo. `null` cuenta como
    /// falso y resuelve el retraso.
    pub fn requested_state(&self) -> Option<bool> {
        self.is_active.map(|value| value.unwrap_or(false))
    }
}

#[derive(Debug, Serialize)]
pub struct DelayCreated {
    pub delay_id: i64,
    pub message: String,
}

impl DelayCreated {
    pub fn new(delay_id: i64) -> Self {
        Self {
            delay_id,
            message: "Delay reported successfully".to_string(),
        }
    }
}
