use std::sync::Arc;
use tracing::debug;

use super::Collection;
use crate::cache::{EntityStore, AUTH_DATA_KEY};
use crate::models::auth::Session;
use crate::utils::errors::AppResult;

/// Sesiones activas, persistidas bajo `authData`
pub struct SessionRepository {
    sessions: Collection<Session>,
}

impl SessionRepository {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self {
            sessions: Collection::new(store, AUTH_DATA_KEY),
        }
    }

    pub async fn store(&self, session: Session) -> AppResult<Session> {
        debug!("💾 Almacenando sesión de {}", session.user_id);
        self.sessions.insert(session).await
    }

    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<Session>> {
        self.sessions.find(token).await
    }

    pub async fn remove(&self, token: &str) -> AppResult<bool> {
        self.sessions.remove(token).await
    }
}
