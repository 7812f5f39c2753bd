//! Estado compartido de la aplicación
//! 
//! Este módulo define el estado que se pasa a través del router de Axum.
//! No hay estado mutable compartido: sólo el pool y la configuración.

use sqlx::SqlitePool;

use crate::config::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
