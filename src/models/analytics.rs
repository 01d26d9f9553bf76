//! Modelos de Analytics
//!
//! Proyecciones de solo lectura calculadas sobre las colecciones de
//! conductores, vehículos y viajes.

use serde::Serialize;

use super::reference::TripView;
use super::{DriverStatus, TripStatus};

/// Tasas globales de los viajes
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripRates {
    pub total_trips: usize,
    pub completed_trips: usize,
    pub refused_trips: usize,
    pub completion_rate: f64,
    pub refusal_rate: f64,
    pub pending_rate: f64,
    pub in_progress_rate: f64,
    /// Tasas formateadas con un decimal ("50.0"), "0" sin viajes
    pub completion_rate_label: String,
    pub refusal_rate_label: String,
}

/// Entrada de la distribución por estado
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusBucket {
    pub status: TripStatus,
    pub label: &'static str,
    pub count: usize,
}

/// Resumen de reportes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub rates: TripRates,
    pub status_distribution: Vec<StatusBucket>,
}

/// Estadísticas por conductor
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriverStats {
    pub driver_id: String,
    pub name: String,
    pub status: DriverStatus,
    pub completed_trips: usize,
    pub refused_trips: usize,
}

/// Uso por vehículo
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleUsage {
    pub vehicle_id: String,
    pub label: String,
    pub completed_trips: usize,
    pub current_km: u64,
}

/// Rechazo reciente con el conductor resuelto
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefusalEntry {
    pub trip_id: String,
    pub origin: String,
    pub destination: String,
    pub driver_label: String,
    pub reason: String,
}

/// Contadores del panel de administración
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub total_drivers: usize,
    pub available_drivers: usize,
    /// Conductores que no están `unavailable` (libres o en viaje)
    pub active_drivers: usize,
    pub total_vehicles: usize,
    pub available_vehicles: usize,
    pub pending_trips: usize,
    pub active_trips: usize,
    pub completed_trips: usize,
    pub refused_trips: usize,
}

/// Panel del conductor
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDashboard {
    pub driver_id: String,
    pub driver_label: String,
    pub pending: Vec<TripView>,
    pub active: Vec<TripView>,
    pub completed: Vec<TripView>,
    pub recent: Vec<TripView>,
}
