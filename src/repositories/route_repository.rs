use sqlx::SqlitePool;

use crate::models::{NewRoute, Route};
use crate::utils::errors::AppError;

const ROUTE_COLUMNS: &str = "route_id, route_name, route_type, operator, start_station, end_station, created_at, updated_at";

pub struct RouteRepository {
    pool: SqlitePool,
}

impl RouteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Route>, AppError> {
        let routes = sqlx::query_as::<_, Route>(&format!(
            "SELECT {} FROM routes ORDER BY route_id",
            ROUTE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    pub async fn find_by_id(&self, route_id: i64) -> Result<Option<Route>, AppError> {
        let route = sqlx::query_as::<_, Route>(&format!(
            "SELECT {} FROM routes WHERE route_id = ?",
            ROUTE_COLUMNS
        ))
        .bind(route_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(route)
    }

    /// Insertar y devolver el id generado
    pub async fn create(&self, route: NewRoute) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO routes (route_name, route_type, operator, start_station, end_station)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(route.route_name)
        .bind(route.route_type)
        .bind(route.operator)
        .bind(route.start_station)
        .bind(route.end_station)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Rutas cuyo nombre u operador casan con el patrón LIKE
    pub async fn search(&self, pattern: &str) -> Result<Vec<Route>, AppError> {
        let routes = sqlx::query_as::<_, Route>(&format!(
            "SELECT {} FROM routes WHERE route_name LIKE ? OR operator LIKE ? ORDER BY route_id",
            ROUTE_COLUMNS
        ))
        .bind(pattern)
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }
}
