//! Contrato del almacén de entidades
//!
//! `get`/`set` operan siempre sobre el valor completo de la colección.
//! Dos escritores sobre la misma clave: gana el último.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::utils::errors::AppResult;

pub const DRIVERS_KEY: &str = "drivers";
pub const VEHICLES_KEY: &str = "vehicles";
pub const TRIPS_KEY: &str = "trips";
pub const AUTH_DATA_KEY: &str = "authData";

/// Almacén clave-valor de colecciones serializadas en JSON
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn get_raw(&self, key: &str) -> AppResult<Option<String>>;

    async fn set_raw(&self, key: &str, value: String) -> AppResult<()>;

    async fn is_healthy(&self) -> bool {
        true
    }
}

/// Operaciones tipadas sobre cualquier `EntityStore`
#[async_trait]
pub trait StoreExt: EntityStore {
    /// Lee y decodifica `key`, devolviendo `default` si no existe
    async fn get_or<T>(&self, key: &str, default: T) -> AppResult<T>
    where
        T: DeserializeOwned + Send,
    {
        match self.get_raw(key).await? {
            Some(raw) => {
                debug!("📥 Store GET {}", key);
                Ok(serde_json::from_str(&raw)?)
            }
            None => {
                debug!("📭 Store GET {} (vacío, usando valor por defecto)", key);
                Ok(default)
            }
        }
    }

    async fn set<T>(&self, key: &str, value: &T) -> AppResult<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        let raw = serde_json::to_string(value)?;
        debug!("💾 Store SET {} ({} bytes)", key, raw.len());
        self.set_raw(key, raw).await
    }
}

impl<S: EntityStore + ?Sized> StoreExt for S {}
