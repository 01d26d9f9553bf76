use std::sync::Arc;

use super::Collection;
use crate::cache::{EntityStore, DRIVERS_KEY};
use crate::models::Driver;
use crate::utils::errors::{not_found_error, AppResult};

pub struct DriverRepository {
    drivers: Collection<Driver>,
}

impl DriverRepository {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self {
            drivers: Collection::new(store, DRIVERS_KEY),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Driver>> {
        self.drivers.load().await
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Driver>> {
        self.drivers.find(id).await
    }

    pub async fn get(&self, id: &str) -> AppResult<Driver> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", id))
    }

    pub async fn create(&self, driver: Driver) -> AppResult<Driver> {
        self.drivers.insert(driver).await
    }

    pub async fn update(&self, driver: Driver) -> AppResult<Driver> {
        let id = driver.id.clone();
        self.drivers
            .replace(driver)
            .await?
            .ok_or_else(|| not_found_error("Driver", &id))
    }

    /// Elimina sin cascada: los viajes que lo referencian quedan colgando
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.drivers.remove(id).await? {
            return Err(not_found_error("Driver", id));
        }
        Ok(())
    }

    pub async fn save_all(&self, drivers: &[Driver]) -> AppResult<()> {
        self.drivers.save(drivers).await
    }
}
