use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::models::TripStatus;
use crate::utils::validation::validate_not_blank;

// Request para crear un viaje; el conductor se asigna automáticamente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    #[validate(custom = "validate_not_blank", length(max = 200))]
    pub origin: String,

    #[validate(custom = "validate_not_blank", length(max = 200))]
    pub destination: String,

    pub date: DateTime<Utc>,

    pub vehicle_id: Option<String>,
}

// Request para rechazar un viaje
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefuseTripRequest {
    #[serde(default)]
    pub reason: String,
}

// Request para completar un viaje
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTripRequest {
    pub final_km: Option<u64>,
}

// Filtros para listar viajes
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripFilters {
    pub driver_id: Option<String>,
    pub status: Option<TripStatus>,
}
