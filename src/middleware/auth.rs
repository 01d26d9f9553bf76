//! Middleware de sesión
//!
//! Resuelve el header `Authorization: Bearer <token>` a la `Session`
//! almacenada y la inyecta en las extensions de la request. No se
//! exige sesión: las rutas deciden si la necesitan para identificar
//! al conductor.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::models::auth::{Session, UserRole};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

/// Extrae el token Bearer del header Authorization
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Middleware opcional: si el token corresponde a una sesión, la inyecta
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let session = match bearer_token(request.headers()) {
        Some(token) => state.sessions().find_by_token(token).await?,
        None => None,
    };

    if let Some(session) = session {
        debug!("🔑 Sesión {} ({})", session.user_id, session.role.as_str());
        request.extensions_mut().insert(session);
    }

    Ok(next.run(request).await)
}

/// Determina de qué conductor se trata.
///
/// Una sesión de conductor usa su propio `driverId`; cualquier otra
/// sesión (o ninguna) debe indicarlo explícitamente.
pub fn resolve_driver_id(session: Option<&Session>, requested: Option<String>) -> AppResult<String> {
    match session {
        Some(session) if session.role == UserRole::Driver => session
            .driver_id
            .clone()
            .ok_or_else(|| AppError::Unauthorized("La sesión no tiene conductor asociado".to_string())),
        _ => requested
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::Unauthorized("Se requiere una sesión de conductor".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::Utc;

    fn session(role: UserRole, driver_id: Option<&str>) -> Session {
        Session {
            token: "token-1".to_string(),
            user_id: "user-1".to_string(),
            name: "Ana".to_string(),
            email: "ana@empresa.com".to_string(),
            role,
            driver_id: driver_id.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert_eq!(bearer_token(&headers), Some("abc"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_driver_session_wins_over_query() {
        let driver = session(UserRole::Driver, Some("driver-1"));
        let id = resolve_driver_id(Some(&driver), Some("driver-2".to_string())).unwrap();
        assert_eq!(id, "driver-1");
    }

    #[test]
    fn test_admin_must_name_the_driver() {
        let admin = session(UserRole::Admin, None);
        assert_eq!(
            resolve_driver_id(Some(&admin), Some("driver-2".to_string())).unwrap(),
            "driver-2"
        );
        assert!(matches!(
            resolve_driver_id(Some(&admin), None),
            Err(AppError::Unauthorized(_))
        ));
        assert!(resolve_driver_id(None, None).is_err());
    }
}
