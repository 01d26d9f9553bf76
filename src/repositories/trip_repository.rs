use std::sync::Arc;

use super::Collection;
use crate::cache::{EntityStore, TRIPS_KEY};
use crate::dto::trip_dto::TripFilters;
use crate::models::Trip;
use crate::utils::errors::{not_found_error, AppResult};

pub struct TripRepository {
    trips: Collection<Trip>,
}

impl TripRepository {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self {
            trips: Collection::new(store, TRIPS_KEY),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Trip>> {
        self.trips.load().await
    }

    pub async fn list_filtered(&self, filters: &TripFilters) -> AppResult<Vec<Trip>> {
        let trips = self.trips.load().await?;
        Ok(trips
            .into_iter()
            .filter(|t| {
                filters
                    .driver_id
                    .as_deref()
                    .map_or(true, |id| t.driver_id.as_deref() == Some(id))
            })
            .filter(|t| filters.status.map_or(true, |status| t.status == status))
            .collect())
    }

    pub async fn get(&self, id: &str) -> AppResult<Trip> {
        self.trips
            .find(id)
            .await?
            .ok_or_else(|| not_found_error("Trip", id))
    }

    pub async fn create(&self, trip: Trip) -> AppResult<Trip> {
        self.trips.insert(trip).await
    }

    pub async fn save_all(&self, trips: &[Trip]) -> AppResult<()> {
        self.trips.save(trips).await
    }
}
