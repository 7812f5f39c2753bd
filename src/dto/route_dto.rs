use serde::{Deserialize, Serialize};
use validator::Validate;

use super::required;
use crate::models::NewRoute;
use crate::utils::errors::AppResult;

// Request para crear una ruta
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    #[validate(required)]
    pub route_name: Option<String>,
    #[validate(required)]
    pub route_type: Option<String>,
    pub operator: Option<String>,
    #[validate(required)]
    pub start_station: Option<String>,
    #[validate(required)]
    pub end_station: Option<String>,
}

impl CreateRouteRequest {
    pub fn into_new_route(self) -> AppResult<NewRoute> {
        Ok(NewRoute {
            route_name: required(self.route_name, "route_name")?,
            route_type: required(self.route_type, "route_type")?,
            operator: self.operator,
            start_station: required(self.start_station, "start_station")?,
            end_station: required(self.end_station, "end_station")?,
        })
    }
}

// Response de creación
#[derive(Debug, Serialize)]
pub struct RouteCreated {
    pub route_id: i64,
    pub message: String,
}

impl RouteCreated {
    pub fn new(route_id: i64) -> Self {
        Self {
            route_id,
            message: "Route created successfully".to_string(),
        }
    }
}
