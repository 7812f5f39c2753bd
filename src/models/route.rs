//! Modelo de Route
//! 
//! Mapea la tabla `routes`. El tipo está restringido por un CHECK en el esquema.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Tipo de ruta - mapea la restricción CHECK de `route_type`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Bus,
    Train,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub route_id: i64,
    pub route_name: String,
    pub route_type: RouteType,
    pub operator: Option<String>,
    pub start_station: String,
    pub end_station: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Datos para insertar una ruta
///
/// `route_type` va como texto: el CHECK de la tabla decide si es válido.
#[derive(Debug, Clone)]
pub struct NewRoute {
    pub route_name: String,
    pub route_type: String,
    pub operator: Option<String>,
    pub start_station: String,
    pub end_station: String,
}
