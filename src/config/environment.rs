//! Configuración de variables de entorno
//! 
//! Este módulo maneja la configuración del entorno y la resolución de la
//! ruta del fichero de base de datos.

use std::env;
use std::path::{Path, PathBuf};

/// Directorio usado cuando el servicio corre dentro de un contenedor
const CONTAINER_DATABASE_DIR: &str = "/app/database";

/// Nombre del fichero SQLite
const DATABASE_FILE_NAME: &str = "transport_db.sqlite";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database_path: PathBuf,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            database_path: PathBuf::from("database").join(DATABASE_FILE_NAME),
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde variables de entorno
    ///
    /// Todas las variables son opcionales; un `PORT` que no sea numérico es un error.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT must be a valid number ({}): {}", value, e))?,
            Err(_) => defaults.port,
        };

        let database_path = match env::var("DATABASE_PATH") {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => resolve_database_path(Path::new(CONTAINER_DATABASE_DIR)),
        };

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            database_path,
        })
    }

    /// Obtener la dirección de escucha del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Nivel de log para el subscriber de tracing
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }
}

/// Elegir la ruta de la base de datos: dentro del contenedor si existe el
/// directorio, si no relativa al directorio de trabajo.
pub fn resolve_database_path(container_dir: &Path) -> PathBuf {
    if container_dir.is_dir() {
        container_dir.join(DATABASE_FILE_NAME)
    } else {
        PathBuf::from("database").join(DATABASE_FILE_NAME)
    }
}
