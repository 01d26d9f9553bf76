//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: configuración, almacén de entidades y
//! autenticador inyectados explícitamente.

use std::sync::Arc;

use crate::cache::{EntityStore, MemoryStore};
use crate::config::environment::EnvironmentConfig;
use crate::repositories::{DriverRepository, SessionRepository, TripRepository, VehicleRepository};
use crate::services::auth_service::{Authenticator, MockAuthenticator};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
    pub store: Arc<dyn EntityStore>,
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        store: Arc<dyn EntityStore>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            authenticator,
        }
    }

    /// Estado con almacén en memoria y autenticador mock
    pub fn in_memory(config: EnvironmentConfig) -> Self {
        Self::new(config, Arc::new(MemoryStore::new()), Arc::new(MockAuthenticator::new()))
    }

    pub fn drivers(&self) -> DriverRepository {
        DriverRepository::new(self.store.clone())
    }

    pub fn vehicles(&self) -> VehicleRepository {
        VehicleRepository::new(self.store.clone())
    }

    pub fn trips(&self) -> TripRepository {
        TripRepository::new(self.store.clone())
    }

    pub fn sessions(&self) -> SessionRepository {
        SessionRepository::new(self.store.clone())
    }
}
