//! Modelo de Vehicle
//!
//! Vehículos de la flota. `driver_id` es una referencia no propietaria
//! que puede quedar colgando si el conductor se elimina.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identified;

/// Estado del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    #[default]
    Available,
    OnTrip,
    Maintenance,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::OnTrip => "on_trip",
            VehicleStatus::Maintenance => "maintenance",
        }
    }
}

/// Vehículo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub model: String,
    pub plate: String,
    pub current_km: u64,
    pub status: VehicleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }

    pub fn display_label(&self) -> String {
        format!("{} ({})", self.model, self.plate)
    }
}

impl Identified for Vehicle {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Normaliza una matrícula: sin espacios alrededor y en mayúsculas
pub fn normalize_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("  abc1d23 "), "ABC1D23");
    }
}
