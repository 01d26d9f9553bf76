use std::sync::Arc;

use super::Collection;
use crate::cache::{EntityStore, VEHICLES_KEY};
use crate::models::Vehicle;
use crate::utils::errors::{not_found_error, AppResult};

pub struct VehicleRepository {
    vehicles: Collection<Vehicle>,
}

impl VehicleRepository {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self {
            vehicles: Collection::new(store, VEHICLES_KEY),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        self.vehicles.load().await
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Vehicle>> {
        self.vehicles.find(id).await
    }

    pub async fn get(&self, id: &str) -> AppResult<Vehicle> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))
    }

    /// Verifica si la matrícula ya está registrada en otro vehículo
    pub async fn plate_exists(&self, plate: &str, except_id: Option<&str>) -> AppResult<bool> {
        Ok(self
            .vehicles
            .load()
            .await?
            .iter()
            .any(|v| v.plate == plate && Some(v.id.as_str()) != except_id))
    }

    pub async fn create(&self, vehicle: Vehicle) -> AppResult<Vehicle> {
        self.vehicles.insert(vehicle).await
    }

    pub async fn update(&self, vehicle: Vehicle) -> AppResult<Vehicle> {
        let id = vehicle.id.clone();
        self.vehicles
            .replace(vehicle)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id))
    }

    /// Elimina sin cascada: los viajes que lo referencian quedan colgando
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.vehicles.remove(id).await? {
            return Err(not_found_error("Vehicle", id));
        }
        Ok(())
    }

    pub async fn save_all(&self, vehicles: &[Vehicle]) -> AppResult<()> {
        self.vehicles.save(vehicles).await
    }
}
