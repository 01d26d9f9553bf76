//! Resolución de referencias
//!
//! `driver_id`/`vehicle_id` en un viaje son claves foráneas opcionales que
//! pueden apuntar a entidades eliminadas. Resolverlas nunca falla: el caso
//! colgante se modela y se muestra con una etiqueta de reemplazo.

use serde::Serialize;

use super::{Driver, Identified, Trip, Vehicle};

pub const UNASSIGNED_LABEL: &str = "Sin asignar";
pub const MISSING_DRIVER_LABEL: &str = "Conductor no encontrado";
pub const MISSING_VEHICLE_LABEL: &str = "Vehículo no encontrado";

/// Capacidad de búsqueda por id sobre una colección
pub trait Resolver<T> {
    fn lookup(&self, id: &str) -> Option<&T>;
}

impl<T: Identified> Resolver<T> for [T] {
    fn lookup(&self, id: &str) -> Option<&T> {
        self.iter().find(|item| item.id() == id)
    }
}

/// Resultado de resolver una clave foránea opcional
#[derive(Debug, Clone, PartialEq)]
pub enum Reference<'a, T> {
    Unassigned,
    Found(&'a T),
    Missing(String),
}

pub fn resolve<'a, T, R>(collection: &'a R, id: Option<&str>) -> Reference<'a, T>
where
    R: Resolver<T> + ?Sized,
{
    match id {
        None => Reference::Unassigned,
        Some(id) => match collection.lookup(id) {
            Some(entity) => Reference::Found(entity),
            None => Reference::Missing(id.to_string()),
        },
    }
}

impl<'a, T> Reference<'a, T> {
    pub fn found(&self) -> Option<&'a T> {
        match self {
            Reference::Found(entity) => Some(*entity),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Reference::Missing(_))
    }
}

impl Reference<'_, Driver> {
    pub fn label(&self) -> String {
        match self {
            Reference::Unassigned => UNASSIGNED_LABEL.to_string(),
            Reference::Found(driver) => driver.name.clone(),
            Reference::Missing(_) => MISSING_DRIVER_LABEL.to_string(),
        }
    }
}

impl Reference<'_, Vehicle> {
    pub fn label(&self) -> String {
        match self {
            Reference::Unassigned => UNASSIGNED_LABEL.to_string(),
            Reference::Found(vehicle) => vehicle.display_label(),
            Reference::Missing(_) => MISSING_VEHICLE_LABEL.to_string(),
        }
    }
}

/// Viaje con sus referencias resueltas para mostrar
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripView {
    #[serde(flatten)]
    pub trip: Trip,
    pub driver_label: String,
    pub vehicle_label: String,
    pub dangling_driver: bool,
    pub dangling_vehicle: bool,
}

impl TripView {
    pub fn build(trip: &Trip, drivers: &[Driver], vehicles: &[Vehicle]) -> Self {
        let driver: Reference<'_, Driver> = resolve(drivers, trip.driver_id.as_deref());
        let vehicle: Reference<'_, Vehicle> = resolve(vehicles, trip.vehicle_id.as_deref());
        Self {
            trip: trip.clone(),
            driver_label: driver.label(),
            vehicle_label: vehicle.label(),
            dangling_driver: driver.is_missing(),
            dangling_vehicle: vehicle.is_missing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{driver, trip, vehicle};
    use crate::models::{DriverStatus, TripStatus, VehicleStatus};

    #[test]
    fn test_resolve_found_missing_and_unassigned() {
        let drivers = vec![driver("driver-1", 0, DriverStatus::Available)];

        let found: Reference<'_, Driver> = resolve(drivers.as_slice(), Some("driver-1"));
        let missing: Reference<'_, Driver> = resolve(drivers.as_slice(), Some("driver-9"));
        let unassigned: Reference<'_, Driver> = resolve(drivers.as_slice(), None);

        assert_eq!(found.label(), "Conductor driver-1");
        assert_eq!(found.found().map(|d| d.id.as_str()), Some("driver-1"));
        assert_eq!(missing.label(), MISSING_DRIVER_LABEL);
        assert!(missing.is_missing());
        assert_eq!(unassigned.label(), UNASSIGNED_LABEL);
    }

    #[test]
    fn test_trip_view_marks_dangling_references() {
        let drivers = vec![driver("driver-1", 0, DriverStatus::Available)];
        let vehicles = vec![vehicle("vehicle-1", 1000, VehicleStatus::Available)];

        let with_gone_vehicle = trip("trip-1", Some("driver-1"), Some("vehicle-gone"), TripStatus::Pending);
        let view = TripView::build(&with_gone_vehicle, &drivers, &vehicles);
        assert_eq!(view.driver_label, "Conductor driver-1");
        assert!(!view.dangling_driver);
        assert_eq!(view.vehicle_label, MISSING_VEHICLE_LABEL);
        assert!(view.dangling_vehicle);

        let unassigned = trip("trip-2", None, Some("vehicle-1"), TripStatus::Pending);
        let view = TripView::build(&unassigned, &drivers, &vehicles);
        assert_eq!(view.driver_label, UNASSIGNED_LABEL);
        assert!(!view.dangling_driver);
        assert_eq!(view.vehicle_label, "Modelo vehicle-1 (ABC1D23)");
    }
}
