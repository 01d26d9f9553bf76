//! Sistema de manejo de errores
//!
//! Este módulo define los errores del dominio de despacho (`DispatchError`)
//! y los errores de la aplicación (`AppError`) con su conversión a
//! respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::models::trip::{TripEvent, TripStatus};

/// Errores de la lógica de despacho (política de asignación y ciclo de vida)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error("No hay conductores disponibles en este momento")]
    NoAvailableDriver,

    #[error("El motivo del rechazo es obligatorio")]
    EmptyRefusalReason,

    #[error("Transición inválida: no se puede aplicar '{event}' a un viaje en estado '{from}'")]
    InvalidTransition { from: TripStatus, event: TripEvent },

    #[error("Kilometraje final {final_km} menor que el inicial {initial_km}")]
    InvalidMileage { initial_km: u64, final_km: u64 },

    #[error("El vehículo '{0}' no está disponible")]
    VehicleUnavailable(String),

    #[error("Viaje con id '{0}' no encontrado")]
    TripNotFound(String),
}

impl DispatchError {
    fn code(&self) -> &'static str {
        match self {
            DispatchError::NoAvailableDriver => "NO_AVAILABLE_DRIVER",
            DispatchError::EmptyRefusalReason => "EMPTY_REFUSAL_REASON",
            DispatchError::InvalidTransition { .. } => "INVALID_TRANSITION",
            DispatchError::InvalidMileage { .. } => "INVALID_MILEAGE",
            DispatchError::VehicleUnavailable(_) => "VEHICLE_UNAVAILABLE",
            DispatchError::TripNotFound(_) => "TRIP_NOT_FOUND",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            DispatchError::NoAvailableDriver => StatusCode::CONFLICT,
            DispatchError::EmptyRefusalReason => StatusCode::BAD_REQUEST,
            DispatchError::InvalidTransition { .. } => StatusCode::CONFLICT,
            DispatchError::InvalidMileage { .. } => StatusCode::BAD_REQUEST,
            DispatchError::VehicleUnavailable(_) => StatusCode::CONFLICT,
            DispatchError::TripNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::Storage(e.to_string())
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Dispatch(e) => {
                warn!("🚫 Operación de despacho rechazada: {}", e);
                let details = match &e {
                    DispatchError::InvalidTransition { from, event } => {
                        Some(json!({ "from": from, "event": event }))
                    }
                    _ => None,
                };
                (
                    e.status(),
                    ErrorResponse {
                        error: "Dispatch Error".to_string(),
                        message: e.to_string(),
                        details,
                        code: Some(e.code().to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::Storage(msg) => {
                error!("❌ Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Storage Error".to_string(),
                        message: "An error occurred while accessing the entity store".to_string(),
                        details: Some(json!({ "storage_error": msg })),
                        code: Some("STORAGE_ERROR".to_string()),
                    },
                )
            }

            AppError::Serialization(e) => {
                error!("❌ Serialization error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Serialization Error".to_string(),
                        message: "Stored data could not be decoded".to_string(),
                        details: Some(json!({ "serde_error": e.to_string() })),
                        code: Some("SERIALIZATION_ERROR".to_string()),
                    },
                )
            }

            AppError::Unauthorized(msg) => {
                warn!("Unauthorized access: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse {
                        error: "Unauthorized".to_string(),
                        message: msg,
                        details: None,
                        code: Some("UNAUTHORIZED".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                warn!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::Conflict(msg) => {
                warn!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("CONFLICT".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
