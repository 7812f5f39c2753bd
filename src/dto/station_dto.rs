use serde::{Deserialize, Serialize};
use validator::Validate;

use super::required;
use crate::models::NewStation;
use crate::utils::errors::AppResult;

// Request para crear una estación; sólo el nombre es obligatorio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStationRequest {
    #[validate(required)]
    pub station_name: Option<String>,
    pub station_type: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
}

impl CreateStationRequest {
    pub fn into_new_station(self) -> AppResult<NewStation> {
        Ok(NewStation {
            station_name: required(self.station_name, "station_name")?,
            station_type: self.station_type,
            latitude: self.latitude,
            longitude: self.longitude,
            address: self.address,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StationCreated {
    pub station_id: i64,
    pub message: String,
}

impl StationCreated {
    pub fn new(station_id: i64) -> Self {
        Self {
            station_id,
            message: "Station created successfully".to_string(),
        }
    }
}
