use chrono::Utc;
use tracing::info;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::trip_dto::{CreateTripRequest, TripFilters};
use crate::models::reference::TripView;
use crate::models::Trip;
use crate::repositories::{DriverRepository, TripRepository, VehicleRepository};
use crate::services::trip_lifecycle::{
    plan_trip, record_assignment, sync_fleet, transition, NewTrip, TripCommand,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::ids::generate_id;

pub struct TripController {
    trips: TripRepository,
    drivers: DriverRepository,
    vehicles: VehicleRepository,
    fleet_sync: bool,
}

impl TripController {
    pub fn new(state: &AppState) -> Self {
        Self {
            trips: state.trips(),
            drivers: state.drivers(),
            vehicles: state.vehicles(),
            fleet_sync: state.config.fleet_sync,
        }
    }

    /// Crea un viaje y lo asigna al conductor disponible con menos viajes
    pub async fn create(&self, request: CreateTripRequest) -> Result<ApiResponse<TripView>, AppError> {
        request.validate()?;

        let mut drivers = self.drivers.list().await?;
        let vehicles = self.vehicles.list().await?;

        let new_trip = NewTrip {
            origin: request.origin.trim().to_string(),
            destination: request.destination.trim().to_string(),
            date: request.date,
            vehicle_id: request.vehicle_id.filter(|id| !id.trim().is_empty()),
        };
        let trip = plan_trip(generate_id("trip"), new_trip, &drivers, &vehicles, Utc::now())?;
        let trip = self.trips.create(trip).await?;

        if self.fleet_sync {
            if let Some(driver_id) = trip.driver_id.as_deref() {
                record_assignment(&mut drivers, driver_id);
                self.drivers.save_all(&drivers).await?;
            }
        }

        let view = TripView::build(&trip, &drivers, &vehicles);
        info!(
            "🧭 Viaje {} creado ({} → {}), asignado a {}",
            trip.id, trip.origin, trip.destination, view.driver_label
        );

        let message = format!("Viaje asignado a {}", view.driver_label);
        Ok(ApiResponse::success_with_message(view, message))
    }

    pub async fn list(&self, filters: &TripFilters) -> Result<Vec<TripView>, AppError> {
        let trips = self.trips.list_filtered(filters).await?;
        let drivers = self.drivers.list().await?;
        let vehicles = self.vehicles.list().await?;

        Ok(trips
            .iter()
            .map(|trip| TripView::build(trip, &drivers, &vehicles))
            .collect())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<TripView, AppError> {
        let trip = self.trips.get(id).await?;
        let drivers = self.drivers.list().await?;
        let vehicles = self.vehicles.list().await?;
        Ok(TripView::build(&trip, &drivers, &vehicles))
    }

    /// Aplica un comando del conductor y persiste el resultado.
    ///
    /// Si la transición es rechazada no se escribe nada.
    pub async fn apply(&self, id: &str, command: TripCommand) -> Result<ApiResponse<Trip>, AppError> {
        let trips = self.trips.list().await?;
        let (mut collection, mut updated) = transition(&trips, id, &command, Utc::now())?;

        if self.fleet_sync {
            let mut drivers = self.drivers.list().await?;
            let mut vehicles = self.vehicles.list().await?;
            sync_fleet(&mut updated, command.event(), &collection, &mut drivers, &mut vehicles);

            if let Some(slot) = collection.iter_mut().find(|t| t.id == updated.id) {
                *slot = updated.clone();
            }
            self.drivers.save_all(&drivers).await?;
            self.vehicles.save_all(&vehicles).await?;
        }

        self.trips.save_all(&collection).await?;
        info!("🚦 Viaje {} ahora está '{}'", updated.id, updated.status);

        let message = format!("Viaje {}", updated.status);
        Ok(ApiResponse::success_with_message(updated, message))
    }
}
