use std::sync::Arc;
use tracing::info;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::common_dto::ApiResponse;
use crate::models::auth::Session;
use crate::repositories::SessionRepository;
use crate::services::auth_service::Authenticator;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct AuthController {
    authenticator: Arc<dyn Authenticator>,
    sessions: SessionRepository,
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            authenticator: state.authenticator.clone(),
            sessions: state.sessions(),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<ApiResponse<LoginResponse>, AppError> {
        let session = self.authenticator.authenticate(&request).await?;
        let session = self.sessions.store(session).await?;
        info!("✅ Login de {} como {}", session.user_id, session.role.as_str());

        let message = format!("Bienvenido, {}", session.name);
        Ok(ApiResponse::success_with_message(
            LoginResponse {
                token: session.token.clone(),
                session,
            },
            message,
        ))
    }

    /// Cierra la sesión; un token desconocido no es un error
    pub async fn logout(&self, token: Option<&str>) -> Result<ApiResponse<()>, AppError> {
        if let Some(token) = token {
            if self.sessions.remove(token).await? {
                info!("👋 Sesión cerrada");
            }
        }
        Ok(ApiResponse::message_only("Sesión cerrada".to_string()))
    }

    pub fn me(&self, session: Option<Session>) -> Result<Session, AppError> {
        session.ok_or_else(|| AppError::Unauthorized("No hay sesión activa".to_string()))
    }
}
