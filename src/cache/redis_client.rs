use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, RedisResult};
use tracing::{debug, error, info};

use super::store::EntityStore;
use super::StorageConfig;
use crate::utils::errors::{AppError, AppResult};

/// Cliente Redis con connection manager y operaciones async
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
    config: StorageConfig,
}

impl RedisClient {
    /// Crear nuevo cliente Redis
    pub async fn new(config: StorageConfig) -> AppResult<Self> {
        info!("🔗 Conectando a Redis: {}", config.redis_url);

        let client = redis::Client::open(config.redis_url.clone())?;
        let manager = ConnectionManager::new(client).await?;

        // Test de conexión usando un comando simple
        let mut conn = manager.clone();
        let _: () = redis::cmd("PING").query_async(&mut conn).await?;

        info!("✅ Redis conectado exitosamente");

        Ok(Self { manager, config })
    }

    /// Generar clave con prefijo
    fn make_key(&self, key: &str) -> String {
        format!("{}:{}", self.config.key_prefix, key)
    }

    /// Verificar si Redis está conectado
    pub async fn is_connected(&self) -> bool {
        let mut conn = self.manager.clone();
        match redis::cmd("PING").query_async::<_, String>(&mut conn).await {
            Ok(response) => response == "PONG",
            Err(_) => false,
        }
    }
}

#[async_trait]
impl EntityStore for RedisClient {
    async fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.manager.clone();
        let full_key = self.make_key(key);

        let value: Option<String> = conn.get(&full_key).await?;
        match &value {
            Some(_) => debug!("📥 Redis HIT para clave: {}", full_key),
            None => debug!("❌ Redis MISS para clave: {}", full_key),
        }
        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: String) -> AppResult<()> {
        let mut conn = self.manager.clone();
        let full_key = self.make_key(key);

        let result: RedisResult<()> = conn.set(&full_key, value).await;
        match result {
            Ok(()) => {
                debug!("💾 Redis SET para clave: {}", full_key);
                Ok(())
            }
            Err(e) => {
                error!("❌ Error guardando en Redis para clave {}: {}", full_key, e);
                Err(AppError::Storage(format!("Error de Redis: {}", e)))
            }
        }
    }

    async fn is_healthy(&self) -> bool {
        self.is_connected().await
    }
}
