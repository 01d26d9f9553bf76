//! Ciclo de vida de los viajes
//!
//! Creación con asignación automática, comandos del conductor
//! (aceptar, rechazar, iniciar, completar) y la sincronización opcional
//! del estado de conductores y vehículos. Todas las funciones son puras:
//! reciben las colecciones y devuelven los valores actualizados.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::assignment_service::select_driver;
use crate::models::reference::Resolver;
use crate::models::{Driver, DriverStatus, Trip, TripEvent, TripStatus, Vehicle, VehicleStatus};
use crate::utils::errors::DispatchError;

/// Datos para crear un viaje
#[derive(Debug, Clone)]
pub struct NewTrip {
    pub origin: String,
    pub destination: String,
    pub date: DateTime<Utc>,
    pub vehicle_id: Option<String>,
}

/// Comando del conductor sobre un viaje
#[derive(Debug, Clone, PartialEq)]
pub enum TripCommand {
    Accept,
    Refuse { reason: String },
    Start,
    Complete { final_km: Option<u64> },
}

impl TripCommand {
    pub fn event(&self) -> TripEvent {
        match self {
            TripCommand::Accept => TripEvent::Accept,
            TripCommand::Refuse { .. } => TripEvent::Refuse,
            TripCommand::Start => TripEvent::Start,
            TripCommand::Complete { .. } => TripEvent::Complete,
        }
    }
}

/// Construye un viaje `pending` asignado al siguiente conductor
pub fn plan_trip(
    id: String,
    request: NewTrip,
    drivers: &[Driver],
    vehicles: &[Vehicle],
    now: DateTime<Utc>,
) -> Result<Trip, DispatchError> {
    let driver = select_driver(drivers).ok_or(DispatchError::NoAvailableDriver)?;

    if let Some(vehicle_id) = request.vehicle_id.as_deref() {
        match vehicles.lookup(vehicle_id) {
            Some(vehicle) if vehicle.is_available() => {}
            _ => return Err(DispatchError::VehicleUnavailable(vehicle_id.to_string())),
        }
    }

    Ok(Trip {
        id,
        origin: request.origin,
        destination: request.destination,
        date: request.date,
        driver_id: Some(driver.id.clone()),
        vehicle_id: request.vehicle_id,
        status: TripStatus::Pending,
        refusal_reason: None,
        initial_km: None,
        final_km: None,
        created_at: now,
        updated_at: now,
    })
}

/// Aplica un comando a un viaje. Si la transición no es legal el viaje no cambia.
pub fn apply_command(trip: &Trip, command: &TripCommand, now: DateTime<Utc>) -> Result<Trip, DispatchError> {
    let event = command.event();
    let next = trip.status.apply(event).ok_or(DispatchError::InvalidTransition {
        from: trip.status,
        event,
    })?;

    let mut updated = trip.clone();
    match command {
        TripCommand::Refuse { reason } => {
            let reason = reason.trim();
            if reason.is_empty() {
                return Err(DispatchError::EmptyRefusalReason);
            }
            updated.refusal_reason = Some(reason.to_string());
        }
        TripCommand::Complete { final_km: Some(final_km) } => {
            if let Some(initial_km) = trip.initial_km {
                if *final_km < initial_km {
                    return Err(DispatchError::InvalidMileage {
                        initial_km,
                        final_km: *final_km,
                    });
                }
            }
            updated.final_km = Some(*final_km);
        }
        _ => {}
    }

    debug!("🔄 Viaje {}: {} --{}--> {}", trip.id, trip.status, event, next);
    updated.status = next;
    updated.updated_at = now;
    Ok(updated)
}

/// Aplica un comando sobre la colección completa, por identidad.
///
/// Devuelve la colección actualizada y el viaje resultante.
pub fn transition(
    trips: &[Trip],
    trip_id: &str,
    command: &TripCommand,
    now: DateTime<Utc>,
) -> Result<(Vec<Trip>, Trip), DispatchError> {
    let current = trips
        .lookup(trip_id)
        .ok_or_else(|| DispatchError::TripNotFound(trip_id.to_string()))?;
    let updated = apply_command(current, command, now)?;

    let collection = trips
        .iter()
        .map(|trip| if trip.id == trip_id { updated.clone() } else { trip.clone() })
        .collect();
    Ok((collection, updated))
}

/// Registra la asignación de un viaje nuevo en el contador del conductor
pub fn record_assignment(drivers: &mut [Driver], driver_id: &str) {
    if let Some(driver) = drivers.iter_mut().find(|d| d.id == driver_id) {
        driver.total_trips += 1;
    }
}

/// Propaga un cambio de estado del viaje a su conductor y vehículo.
///
/// `trips` es la colección ya actualizada. Referencias colgantes se
/// ignoran. Liberar solo devuelve a `available` lo que está `on_trip` y
/// no tiene otro viaje `in_progress`.
pub fn sync_fleet(
    trip: &mut Trip,
    event: TripEvent,
    trips: &[Trip],
    drivers: &mut [Driver],
    vehicles: &mut [Vehicle],
) {
    let driver_busy = busy_elsewhere(trips, trip, |t| t.driver_id.is_some() && t.driver_id == trip.driver_id);
    let vehicle_busy = busy_elsewhere(trips, trip, |t| t.vehicle_id.is_some() && t.vehicle_id == trip.vehicle_id);

    let driver = trip
        .driver_id
        .as_deref()
        .and_then(|id| drivers.iter_mut().find(|d| d.id == id));
    let vehicle = trip
        .vehicle_id
        .as_deref()
        .and_then(|id| vehicles.iter_mut().find(|v| v.id == id));

    match event {
        TripEvent::Accept => {}
        TripEvent::Start => {
            if let Some(driver) = driver {
                driver.status = DriverStatus::OnTrip;
            }
            if let Some(vehicle) = vehicle {
                vehicle.status = VehicleStatus::OnTrip;
                trip.initial_km = Some(vehicle.current_km);
            }
        }
        TripEvent::Refuse => {
            if let Some(driver) = driver {
                driver.refused_trips += 1;
                if !driver_busy {
                    release_driver(driver);
                }
            }
            if let Some(vehicle) = vehicle.filter(|_| !vehicle_busy) {
                release_vehicle(vehicle);
            }
        }
        TripEvent::Complete => {
            if let Some(driver) = driver.filter(|_| !driver_busy) {
                release_driver(driver);
            }
            if let Some(vehicle) = vehicle {
                if let Some(final_km) = trip.final_km {
                    vehicle.current_km = vehicle.current_km.max(final_km);
                }
                if !vehicle_busy {
                    release_vehicle(vehicle);
                }
            }
        }
    }
}

/// Otro viaje `in_progress` que comparte conductor o vehículo con `trip`
fn busy_elsewhere(trips: &[Trip], trip: &Trip, shares: impl Fn(&Trip) -> bool) -> bool {
    trips
        .iter()
        .any(|other| other.id != trip.id && other.status == TripStatus::InProgress && shares(other))
}

fn release_driver(driver: &mut Driver) {
    if driver.status == DriverStatus::OnTrip {
        driver.status = DriverStatus::Available;
    }
}

fn release_vehicle(vehicle: &mut Vehicle) {
    if vehicle.status == VehicleStatus::OnTrip {
        vehicle.status = VehicleStatus::Available;
    }
}
