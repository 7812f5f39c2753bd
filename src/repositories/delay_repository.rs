use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::{DelayDetail, DelayListItem, NewDelay, ScheduleDelay};
use crate::utils::errors::AppError;
use crate::utils::filters::FilterBuilder;

const DELAY_LIST_SELECT: &str = r#"
    SELECT d.delay_id, d.schedule_id, r.route_name, s.departure_time,
           d.delay_minutes, d.reason, d.reported_at, d.is_active
    FROM delays d
    JOIN schedules s ON d.schedule_id = s.schedule_id
    JOIN routes r ON s.route_id = r.route_id"#;

pub struct DelayRepository {
    pool: SqlitePool,
}

impl DelayRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Retrasos por estado y, opcionalmente, por ruta; los más recientes primero
    pub async fn find_filtered(
        &self,
        is_active: bool,
        route_id: Option<i64>,
    ) -> Result<Vec<DelayListItem>, AppError> {
        let filters = FilterBuilder::new()
            .eq("d.is_active = ", is_active)
            .eq_opt("r.route_id = ", route_id);

        let mut query = QueryBuilder::<Sqlite>::new(DELAY_LIST_SELECT);
        filters.apply(&mut query);
        query.push(" ORDER BY d.reported_at DESC, d.delay_id DESC");

        let delays = query
            .build_query_as::<DelayListItem>()
            .fetch_all(&self.pool)
            .await?;

        Ok(delays)
    }

    pub async fn find_by_id(&self, delay_id: i64) -> Result<Option<DelayDetail>, AppError> {
        let delay = sqlx::query_as::<_, DelayDetail>(
            r#"
            SELECT d.delay_id, d.schedule_id, r.route_name,
                   d.delay_minutes, d.reason, d.reported_at, d.is_active, d.resolved_at
            FROM delays d
            JOIN schedules s ON d.schedule_id = s.schedule_id
            JOIN routes r ON s.route_id = r.route_id
            WHERE d.delay_id = ?
            "#,
        )
        .bind(delay_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(delay)
    }

    pub async fn find_by_schedule(&self, schedule_id: i64) -> Result<Vec<ScheduleDelay>, AppError> {
        let delays = sqlx::query_as::<_, ScheduleDelay>(
            r#"
            SELECT delay_id, delay_minutes, reason, reported_at, is_active
            FROM delays
            WHERE schedule_id = ?
            ORDER BY reported_at DESC, delay_id DESC
            "#,
        )
        .bind(schedule_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(delays)
    }

    /// Todo retraso nuevo nace activo
    pub async fn create(&self, delay: NewDelay) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO delays (schedule_id, delay_minutes, reason, is_active)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(delay.schedule_id)
        .bind(delay.delay_minutes)
        .bind(delay.reason)
        .bind(true)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Resolver (`false`) sella `resolved_at`; reactivar (`true`) lo limpia.
    /// Devuelve las filas afectadas.
    pub async fn set_active(&self, delay_id: i64, is_active: bool) -> Result<u64, AppError> {
        let sql = if is_active {
            "UPDATE delays SET is_active = 1, resolved_at = NULL, updated_at = CURRENT_TIMESTAMP WHERE delay_id = ?"
        } else {
            "UPDATE delays SET is_active = 0, resolved_at = CURRENT_TIMESTAMP, updated_at = CURRENT_TIMESTAMP WHERE delay_id = ?"
        };

        let result = sqlx::query(sql).bind(delay_id).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }
}
