use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::dto::auth_dto::LoginRequest;
use crate::models::auth::{Session, UserRole};
use crate::utils::errors::{bad_request_error, AppResult};
use crate::utils::ids::generate_id;

/// Produce sesiones a partir de una solicitud de login.
///
/// El núcleo solo conoce `Session`; una verificación real puede
/// sustituir al mock sin tocar el resto.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, request: &LoginRequest) -> AppResult<Session>;
}

/// Selector de rol sin verificación
#[derive(Debug, Clone, Default)]
pub struct MockAuthenticator;

impl MockAuthenticator {
    pub fn new() -> Self {
        Self
    }

    fn default_name(role: UserRole) -> &'static str {
        match role {
            UserRole::Admin => "Administrador",
            UserRole::Driver => "Conductor",
        }
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, request: &LoginRequest) -> AppResult<Session> {
        let role = request.role;
        if role == UserRole::Driver && request.driver_id.as_deref().map_or(true, |id| id.trim().is_empty()) {
            return Err(bad_request_error("Un conductor debe indicar su driverId"));
        }

        let session = Session {
            token: Uuid::new_v4().to_string(),
            user_id: request
                .user_id
                .clone()
                .unwrap_or_else(|| generate_id(role.as_str())),
            name: request
                .name
                .clone()
                .unwrap_or_else(|| Self::default_name(role).to_string()),
            email: request
                .email
                .clone()
                .unwrap_or_else(|| format!("{}@empresa.com", role.as_str())),
            role,
            driver_id: match role {
                UserRole::Driver => request.driver_id.clone(),
                UserRole::Admin => None,
            },
            created_at: Utc::now(),
        };

        info!("🔐 Sesión mock creada para {} ({})", session.name, role.as_str());
        Ok(session)
    }
}
