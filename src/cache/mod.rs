//! Almacén de entidades
//!
//! Este módulo contiene el colaborador de persistencia: colecciones
//! completas direccionadas por clave, con lectura-modificación-escritura
//! y sin transacciones. Hay un backend en memoria y uno en Redis.

pub mod cache_config;
pub mod memory_store;
pub mod redis_client;
pub mod store;

pub use cache_config::{StorageBackend, StorageConfig};
pub use memory_store::MemoryStore;
pub use redis_client::RedisClient;
pub use store::{EntityStore, StoreExt, AUTH_DATA_KEY, DRIVERS_KEY, TRIPS_KEY, VEHICLES_KEY};

use std::sync::Arc;
use tracing::info;

use crate::utils::errors::AppResult;

/// Construye el almacén configurado
pub async fn connect_store(config: &StorageConfig) -> AppResult<Arc<dyn EntityStore>> {
    match config.backend {
        StorageBackend::Memory => {
            info!("🗄️ Usando almacén en memoria");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::Redis => {
            let client = RedisClient::new(config.clone()).await?;
            Ok(Arc::new(client))
        }
    }
}
