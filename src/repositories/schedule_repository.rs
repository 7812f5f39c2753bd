use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::{NewSchedule, ScheduleMatch, ScheduleView};
use crate::utils::errors::AppError;
use crate::utils::filters::FilterBuilder;

/// Proyección común: ruta y ambas estaciones por nombre
const SCHEDULE_SELECT: &str = r#"
    SELECT s.schedule_id, s.route_id, r.route_name,
           ds.station_name AS departure_station,
           ast.station_name AS arrival_station,
           s.departure_time, s.arrival_time, s.day_of_week, s.frequency
    FROM schedules s
    JOIN routes r ON s.route_id = r.route_id
    JOIN stations ds ON s.departure_station_id = ds.station_id
    JOIN stations ast ON s.arrival_station_id = ast.station_id"#;

pub struct ScheduleRepository {
    pool: SqlitePool,
}

impl ScheduleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Listado con filtros opcionales por ruta y día
    pub async fn find_filtered(
        &self,
        route_id: Option<i64>,
        day_of_week: Option<String>,
    ) -> Result<Vec<ScheduleView>, AppError> {
        let filters = FilterBuilder::new()
            .eq_opt("s.route_id = ", route_id)
            .eq_opt("s.day_of_week = ", day_of_week);

        let mut query = QueryBuilder::<Sqlite>::new(SCHEDULE_SELECT);
        filters.apply(&mut query);
        query.push(" ORDER BY s.schedule_id");

        let schedules = query
            .build_query_as::<ScheduleView>()
            .fetch_all(&self.pool)
            .await?;

        Ok(schedules)
    }

    pub async fn find_by_id(&self, schedule_id: i64) -> Result<Option<ScheduleView>, AppError> {
        let schedule = sqlx::query_as::<_, ScheduleView>(&format!(
            "{} WHERE s.schedule_id = ?",
            SCHEDULE_SELECT
        ))
        .bind(schedule_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(schedule)
    }

    pub async fn find_by_route(&self, route_id: i64) -> Result<Vec<ScheduleView>, AppError> {
        self.find_filtered(Some(route_id), None).await
    }

    /// Insertar; una llegada no posterior a la salida falla en el CHECK
    pub async fn create(&self, schedule: NewSchedule) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO schedules (route_id, departure_station_id, arrival_station_id,
                                   departure_time, arrival_time, day_of_week, frequency)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(schedule.route_id)
        .bind(schedule.departure_station_id)
        .bind(schedule.arrival_station_id)
        .bind(schedule.departure_time)
        .bind(schedule.arrival_time)
        .bind(schedule.day_of_week)
        .bind(schedule.frequency)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Horarios cuyo nombre de ruta o de alguna estación casa con el patrón
    pub async fn search(&self, pattern: &str) -> Result<Vec<ScheduleMatch>, AppError> {
        let schedules = sqlx::query_as::<_, ScheduleMatch>(
            r#"
            SELECT s.schedule_id, s.route_id, r.route_name,
                   ds.station_name AS departure_station,
                   ast.station_name AS arrival_station,
                   s.departure_time, s.arrival_time
            FROM schedules s
            JOIN routes r ON s.route_id = r.route_id
            JOIN stations ds ON s.departure_station_id = ds.station_id
            JOIN stations ast ON s.arrival_station_id = ast.station_id
            WHERE r.route_name LIKE ?
               OR ds.station_name LIKE ?
               OR ast.station_name LIKE ?
            ORDER BY s.schedule_id
            "#,
        )
        .bind(pattern)
        .bind(pattern)
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(schedules)
    }
}
