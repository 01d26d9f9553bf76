//! Modelo de Driver
//!
//! Conductores registrados por el administrador. Los contadores
//! `total_trips` y `refused_trips` alimentan la política de asignación.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identified;

/// Estado del conductor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    #[default]
    Available,
    OnTrip,
    Unavailable,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Available => "available",
            DriverStatus::OnTrip => "on_trip",
            DriverStatus::Unavailable => "unavailable",
        }
    }
}

/// Conductor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub cnh: String,
    pub phone: String,
    pub email: String,
    pub status: DriverStatus,
    #[serde(default)]
    pub total_trips: u32,
    #[serde(default)]
    pub refused_trips: u32,
    pub created_at: DateTime<Utc>,
}

impl Driver {
    pub fn is_available(&self) -> bool {
        self.status == DriverStatus::Available
    }
}

impl Identified for Driver {
    fn id(&self) -> &str {
        &self.id
    }
}
