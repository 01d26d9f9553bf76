use crate::models::analytics::{
    AdminDashboard, DriverDashboard, DriverStats, RefusalEntry, ReportSummary, VehicleUsage,
};
use crate::models::reference::TripView;
use crate::models::{Driver, Trip, Vehicle};
use crate::repositories::{DriverRepository, TripRepository, VehicleRepository};
use crate::services::analytics_service;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Reportes y tableros, recalculados en cada lectura
pub struct ReportController {
    trips: TripRepository,
    drivers: DriverRepository,
    vehicles: VehicleRepository,
    top_drivers_limit: usize,
}

impl ReportController {
    pub fn new(state: &AppState) -> Self {
        Self {
            trips: state.trips(),
            drivers: state.drivers(),
            vehicles: state.vehicles(),
            top_drivers_limit: state.config.top_drivers_limit,
        }
    }

    async fn snapshot(&self) -> Result<(Vec<Driver>, Vec<Vehicle>, Vec<Trip>), AppError> {
        Ok((
            self.drivers.list().await?,
            self.vehicles.list().await?,
            self.trips.list().await?,
        ))
    }

    pub async fn summary(&self) -> Result<ReportSummary, AppError> {
        let trips = self.trips.list().await?;
        Ok(analytics_service::report_summary(&trips))
    }

    pub async fn driver_stats(&self) -> Result<Vec<DriverStats>, AppError> {
        let (drivers, _, trips) = self.snapshot().await?;
        Ok(analytics_service::driver_stats(&drivers, &trips))
    }

    pub async fn top_drivers(&self, limit: Option<usize>) -> Result<Vec<DriverStats>, AppError> {
        let (drivers, _, trips) = self.snapshot().await?;
        let limit = limit.unwrap_or(self.top_drivers_limit);
        Ok(analytics_service::top_drivers(&drivers, &trips, limit))
    }

    pub async fn vehicle_usage(&self) -> Result<Vec<VehicleUsage>, AppError> {
        let (_, vehicles, trips) = self.snapshot().await?;
        Ok(analytics_service::vehicle_usage(&vehicles, &trips))
    }

    pub async fn refusals(&self) -> Result<Vec<RefusalEntry>, AppError> {
        let (drivers, _, trips) = self.snapshot().await?;
        Ok(analytics_service::recent_refusals(&drivers, &trips))
    }

    pub async fn admin_dashboard(&self) -> Result<AdminDashboard, AppError> {
        let (drivers, vehicles, trips) = self.snapshot().await?;
        Ok(analytics_service::admin_dashboard(&drivers, &vehicles, &trips))
    }

    pub async fn driver_dashboard(&self, driver_id: &str) -> Result<DriverDashboard, AppError> {
        let (drivers, vehicles, trips) = self.snapshot().await?;
        Ok(analytics_service::driver_dashboard(driver_id, &drivers, &vehicles, &trips))
    }

    pub async fn driver_trips(&self, driver_id: &str) -> Result<Vec<TripView>, AppError> {
        let (drivers, vehicles, trips) = self.snapshot().await?;
        Ok(analytics_service::trips_for_driver(driver_id, &drivers, &vehicles, &trips))
    }
}
