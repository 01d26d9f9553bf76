//! Fleet Dispatch
//!
//! Núcleo de despacho de viajes: asignación automática de conductores,
//! ciclo de vida de los viajes, reportes y un API HTTP sobre un almacén
//! de entidades clave-valor (memoria o Redis).

pub mod cache;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::{cors_layer, session_middleware};
use crate::routes::{auth_routes, driver_routes, report_routes, trip_routes, vehicle_routes};
use crate::state::AppState;

/// Construye el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", auth_routes::auth_routes())
        .nest("/api/drivers", driver_routes::create_driver_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/trips", trip_routes::create_trip_router())
        .nest("/api/reports", report_routes::create_report_router())
        .nest("/api", report_routes::create_dashboard_router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check: reporta el estado del almacén
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let healthy = state.store.is_healthy().await;
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if healthy { "ok" } else { "degraded" },
            "storage": state.config.storage.backend.as_str(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}
