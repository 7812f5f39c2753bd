use serde::{Deserialize, Serialize};

use crate::models::{Route, ScheduleMatch};

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub search_type: Option<String>,
}

/// Categorías que cubre una búsqueda
///
/// Un `type` desconocido no coincide con ninguna y devuelve ambas listas vacías.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    All,
    Route,
    Schedule,
    Unrecognized,
}

impl SearchScope {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("all") => SearchScope::All,
            Some("route") => SearchScope::Route,
            Some("schedule") => SearchScope::Schedule,
            Some(_) => SearchScope::Unrecognized,
        }
    }

    pub fn includes_routes(self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Route)
    }

    pub fn includes_schedules(self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Schedule)
    }
}

/// Patrón LIKE de subcadena. `%` y `_` del usuario no se escapan.
pub fn like_pattern(term: &str) -> String {
    format!("%{}%", term)
}

#[derive(Debug, Default, Serialize)]
pub struct SearchResults {
    pub routes: Vec<Route>,
    pub schedules: Vec<ScheduleMatch>,
}
