//! Conexión a la base de datos SQLite
//! 
//! Abre el pool y, si el fichero no existía, aplica el esquema completo.
//! Un fichero existente se reutiliza tal cual: no hay migraciones.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use super::schema::SCHEMA_STATEMENTS;

pub struct DatabaseConnection {
    pool: SqlitePool,
    schema_created: bool,
}

impl DatabaseConnection {
    /// Abrir la base de datos descrita por `config`
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let is_new = !config.path.exists();

        if is_new {
            info!("🗄️ Inicializando base de datos en {}", config.path.display());
            if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Cannot create directory {}", parent.display()))?;
            }
        }

        let pool = config
            .create_pool()
            .await
            .with_context(|| format!("Cannot open database {}", config.path.display()))?;

        if is_new {
            apply_schema(&pool).await.context("Cannot apply database schema")?;
            info!("✅ Esquema creado correctamente");
        }

        Ok(Self {
            pool,
            schema_created: is_new,
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Indica si esta apertura creó el esquema
    pub fn schema_created(&self) -> bool {
        self.schema_created
    }
}

/// Ejecutar el DDL dentro de una única transacción
pub async fn apply_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in SCHEMA_STATEMENTS.iter().copied() {
        debug!("DDL: {}", statement.trim());
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await
}

/// Verificar que la base de datos responde
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::schema::TABLES;

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar::<_, String>(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_creates_schema_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::new(dir.path().join("nested").join("transit.sqlite"));

        let db = DatabaseConnection::new(&config).await.unwrap();
        assert!(db.schema_created());

        let tables = table_names(db.pool()).await;
        for table in TABLES {
            assert!(tables.iter().any(|t| t == table), "missing table {}", table);
        }
        ping(db.pool()).await.unwrap();
    }

    #[tokio::test]
    async fn test_reuses_existing_file_unmodified() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::new(dir.path().join("transit.sqlite"));

        let first = DatabaseConnection::new(&config).await.unwrap();
        sqlx::query(
            "INSERT INTO routes (route_name, route_type, start_station, end_station) VALUES ('R1', 'bus', 'A', 'B')",
        )
        .execute(first.pool())
        .await
        .unwrap();
        first.pool().close().await;

        let second = DatabaseConnection::new(&config).await.unwrap();
        assert!(!second.schema_created());

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM routes")
            .fetch_one(second.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
