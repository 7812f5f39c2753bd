use sqlx::SqlitePool;
use tracing::debug;

use crate::dto::search_dto::{like_pattern, SearchQuery, SearchResults, SearchScope};
use crate::repositories::{RouteRepository, ScheduleRepository};
use crate::utils::errors::{bad_request_error, AppError};

pub struct SearchController {
    routes: RouteRepository,
    schedules: ScheduleRepository,
}

impl SearchController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            routes: RouteRepository::new(pool.clone()),
            schedules: ScheduleRepository::new(pool),
        }
    }

    pub async fn search(&self, query: SearchQuery) -> Result<SearchResults, AppError> {
        let term = query.q.as_deref().map(str::trim).unwrap_or_default();
        if term.is_empty() {
            return Err(bad_request_error("Search query cannot be empty"));
        }

        let scope = SearchScope::parse(query.search_type.as_deref());
        let pattern = like_pattern(term);
        debug!("🔍 Búsqueda '{}' ({:?})", pattern, scope);

        let mut results = SearchResults::default();
        if scope.includes_routes() {
            results.routes = self.routes.search(&pattern).await?;
        }
        if scope.includes_schedules() {
            results.schedules = self.schedules.search(&pattern).await?;
        }

        Ok(results)
    }
}
