use serde::{Deserialize, Serialize};

use crate::models::auth::{Session, UserRole};

// Request de login: solo se elige el rol
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub role: UserRole,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub driver_id: Option<String>,
}

// Response de login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub session: Session,
}
