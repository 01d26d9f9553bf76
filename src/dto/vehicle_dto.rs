use serde::Deserialize;
use validator::Validate;

use crate::models::VehicleStatus;
use crate::utils::validation::validate_not_blank;

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(custom = "validate_not_blank", length(max = 100))]
    pub model: String,

    #[validate(custom = "validate_not_blank", length(max = 10))]
    pub plate: String,

    #[serde(default)]
    pub current_km: u64,

    pub status: Option<VehicleStatus>,

    pub driver_id: Option<String>,
}

// Request para actualizar un vehículo
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(custom = "validate_not_blank", length(max = 100))]
    pub model: Option<String>,

    #[validate(custom = "validate_not_blank", length(max = 10))]
    pub plate: Option<String>,

    pub current_km: Option<u64>,

    pub status: Option<VehicleStatus>,

    pub driver_id: Option<String>,
}
