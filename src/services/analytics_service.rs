//! Servicio de Analytics
//!
//! Proyecciones puras sobre las tres colecciones. Se recalculan en cada
//! lectura y toleran colecciones vacías.

use crate::models::analytics::{
    AdminDashboard, DriverDashboard, DriverStats, RefusalEntry, ReportSummary, StatusBucket,
    TripRates, VehicleUsage,
};
use crate::models::reference::{resolve, Reference, TripView};
use crate::models::{Driver, DriverStatus, Trip, TripStatus, Vehicle};

pub const DEFAULT_TOP_DRIVERS: usize = 5;
pub const RECENT_REFUSALS: usize = 5;
pub const RECENT_DRIVER_TRIPS: usize = 10;

/// Orden fijo de la distribución por estado
const DISTRIBUTION_ORDER: [(TripStatus, &str); 4] = [
    (TripStatus::Completed, "Completados"),
    (TripStatus::InProgress, "En curso"),
    (TripStatus::Pending, "Pendientes"),
    (TripStatus::Refused, "Rechazados"),
];

/// Porcentaje con un decimal; 0 cuando no hay total
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Porcentaje formateado ("50.0"), "0" cuando no hay total
pub fn format_rate(part: usize, total: usize) -> String {
    if total == 0 {
        return "0".to_string();
    }
    format!("{:.1}", part as f64 / total as f64 * 100.0)
}

pub fn count_by_status(trips: &[Trip], status: TripStatus) -> usize {
    trips.iter().filter(|t| t.status == status).count()
}

fn count_for_driver(trips: &[Trip], driver_id: &str, status: TripStatus) -> usize {
    trips
        .iter()
        .filter(|t| t.status == status && t.driver_id.as_deref() == Some(driver_id))
        .count()
}

pub fn trip_rates(trips: &[Trip]) -> TripRates {
    let total = trips.len();
    let completed = count_by_status(trips, TripStatus::Completed);
    let refused = count_by_status(trips, TripStatus::Refused);
    let pending = count_by_status(trips, TripStatus::Pending);
    let in_progress = count_by_status(trips, TripStatus::InProgress);

    TripRates {
        total_trips: total,
        completed_trips: completed,
        refused_trips: refused,
        completion_rate: percentage(completed, total),
        refusal_rate: percentage(refused, total),
        pending_rate: percentage(pending, total),
        in_progress_rate: percentage(in_progress, total),
        completion_rate_label: format_rate(completed, total),
        refusal_rate_label: format_rate(refused, total),
    }
}

pub fn status_distribution(trips: &[Trip]) -> Vec<StatusBucket> {
    DISTRIBUTION_ORDER
        .iter()
        .map(|(status, label)| StatusBucket {
            status: *status,
            label: *label,
            count: count_by_status(trips, *status),
        })
        .collect()
}

pub fn report_summary(trips: &[Trip]) -> ReportSummary {
    ReportSummary {
        rates: trip_rates(trips),
        status_distribution: status_distribution(trips),
    }
}

/// Completados y rechazados por conductor, en el orden de la colección
pub fn driver_stats(drivers: &[Driver], trips: &[Trip]) -> Vec<DriverStats> {
    drivers
        .iter()
        .map(|driver| DriverStats {
            driver_id: driver.id.clone(),
            name: driver.name.clone(),
            status: driver.status,
            completed_trips: count_for_driver(trips, &driver.id, TripStatus::Completed),
            refused_trips: count_for_driver(trips, &driver.id, TripStatus::Refused),
        })
        .collect()
}

/// Los `limit` conductores con más viajes completados.
///
/// El orden es estable: en empate se conserva el orden de la colección.
pub fn top_drivers(drivers: &[Driver], trips: &[Trip], limit: usize) -> Vec<DriverStats> {
    let mut stats = driver_stats(drivers, trips);
    stats.sort_by(|a, b| b.completed_trips.cmp(&a.completed_trips));
    stats.truncate(limit);
    stats
}

pub fn vehicle_usage(vehicles: &[Vehicle], trips: &[Trip]) -> Vec<VehicleUsage> {
    vehicles
        .iter()
        .map(|vehicle| VehicleUsage {
            vehicle_id: vehicle.id.clone(),
            label: vehicle.display_label(),
            completed_trips: trips
                .iter()
                .filter(|t| {
                    t.status == TripStatus::Completed && t.vehicle_id.as_deref() == Some(vehicle.id.as_str())
                })
                .count(),
            current_km: vehicle.current_km,
        })
        .collect()
}

/// Rechazos con motivo, los primeros `RECENT_REFUSALS` de la colección
pub fn recent_refusals(drivers: &[Driver], trips: &[Trip]) -> Vec<RefusalEntry> {
    trips
        .iter()
        .filter(|t| t.status == TripStatus::Refused)
        .filter_map(|t| {
            let reason = t.refusal_reason.as_deref()?;
            let driver: Reference<'_, Driver> = resolve(drivers, t.driver_id.as_deref());
            Some(RefusalEntry {
                trip_id: t.id.clone(),
                origin: t.origin.clone(),
                destination: t.destination.clone(),
                driver_label: driver.label(),
                reason: reason.to_string(),
            })
        })
        .take(RECENT_REFUSALS)
        .collect()
}

pub fn admin_dashboard(drivers: &[Driver], vehicles: &[Vehicle], trips: &[Trip]) -> AdminDashboard {
    AdminDashboard {
        total_drivers: drivers.len(),
        available_drivers: drivers.iter().filter(|d| d.is_available()).count(),
        active_drivers: drivers
            .iter()
            .filter(|d| d.status != DriverStatus::Unavailable)
            .count(),
        total_vehicles: vehicles.len(),
        available_vehicles: vehicles.iter().filter(|v| v.is_available()).count(),
        pending_trips: count_by_status(trips, TripStatus::Pending),
        active_trips: count_by_status(trips, TripStatus::InProgress),
        completed_trips: count_by_status(trips, TripStatus::Completed),
        refused_trips: count_by_status(trips, TripStatus::Refused),
    }
}

/// Viajes de un conductor, con sus referencias resueltas
pub fn trips_for_driver(driver_id: &str, drivers: &[Driver], vehicles: &[Vehicle], trips: &[Trip]) -> Vec<TripView> {
    trips
        .iter()
        .filter(|t| t.driver_id.as_deref() == Some(driver_id))
        .map(|t| TripView::build(t, drivers, vehicles))
        .collect()
}

pub fn driver_dashboard(driver_id: &str, drivers: &[Driver], vehicles: &[Vehicle], trips: &[Trip]) -> DriverDashboard {
    let mine = trips_for_driver(driver_id, drivers, vehicles, trips);
    let with_status = |status: TripStatus| -> Vec<TripView> {
        mine.iter().filter(|v| v.trip.status == status).cloned().collect()
    };
    let driver: Reference<'_, Driver> = resolve(drivers, Some(driver_id));

    DriverDashboard {
        driver_id: driver_id.to_string(),
        driver_label: driver.label(),
        pending: with_status(TripStatus::Pending),
        active: with_status(TripStatus::InProgress),
        completed: with_status(TripStatus::Completed),
        recent: mine.iter().take(RECENT_DRIVER_TRIPS).cloned().collect(),
    }
}
