//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables
//! tienen un valor por defecto; un valor presente pero inválido es un
//! error de configuración.

use std::env;
use std::str::FromStr;

use crate::cache::{StorageBackend, StorageConfig};
use crate::services::analytics_service::DEFAULT_TOP_DRIVERS;
use crate::utils::errors::{AppError, AppResult};

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub storage: StorageConfig,
    /// Propagar el ciclo de vida de los viajes a conductores y vehículos
    pub fleet_sync: bool,
    pub top_drivers_limit: usize,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            storage: StorageConfig::default(),
            fleet_sync: true,
            top_drivers_limit: DEFAULT_TOP_DRIVERS,
        }
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Internal(format!("{} has an invalid value: '{}'", name, raw))),
        Err(_) => Ok(default),
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        let storage_defaults = StorageConfig::default();

        let backend = match env::var("STORAGE_BACKEND") {
            Ok(raw) => raw.parse::<StorageBackend>().map_err(AppError::Internal)?,
            Err(_) => storage_defaults.backend,
        };

        Ok(Self {
            environment: var_or("ENVIRONMENT", &defaults.environment),
            port: parse_var("PORT", defaults.port)?,
            host: var_or("HOST", &defaults.host),
            cors_origins: var_or("CORS_ORIGINS", "")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            storage: StorageConfig {
                backend,
                redis_url: var_or("REDIS_URL", &storage_defaults.redis_url),
                key_prefix: var_or("REDIS_KEY_PREFIX", &storage_defaults.key_prefix),
            },
            fleet_sync: parse_var("FLEET_SYNC", defaults.fleet_sync)?,
            top_drivers_limit: parse_var("TOP_DRIVERS_LIMIT", defaults.top_drivers_limit)?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
