use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::Deserialize;

use crate::controllers::ReportController;
use crate::middleware::auth::resolve_driver_id;
use crate::models::analytics::{
    AdminDashboard, DriverDashboard, DriverStats, RefusalEntry, ReportSummary, VehicleUsage,
};
use crate::models::auth::Session;
use crate::models::reference::TripView;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct TopDriversQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverQuery {
    pub driver_id: Option<String>,
}

/// Rutas de reportes (`/api/reports`)
pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(summary))
        .route("/drivers", get(driver_stats))
        .route("/top-drivers", get(top_drivers))
        .route("/vehicles", get(vehicle_usage))
        .route("/refusals", get(refusals))
}

/// Tableros del panel (`/api/dashboard/admin`, `/api/driver/...`)
pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard/admin", get(admin_dashboard))
        .route("/driver/dashboard", get(driver_dashboard))
        .route("/driver/trips", get(driver_trips))
}

async fn summary(State(state): State<AppState>) -> Result<Json<ReportSummary>, AppError> {
    let controller = ReportController::new(&state);
    Ok(Json(controller.summary().await?))
}

async fn driver_stats(State(state): State<AppState>) -> Result<Json<Vec<DriverStats>>, AppError> {
    let controller = ReportController::new(&state);
    Ok(Json(controller.driver_stats().await?))
}

async fn top_drivers(
    State(state): State<AppState>,
    Query(query): Query<TopDriversQuery>,
) -> Result<Json<Vec<DriverStats>>, AppError> {
    let controller = ReportController::new(&state);
    Ok(Json(controller.top_drivers(query.limit).await?))
}

async fn vehicle_usage(State(state): State<AppState>) -> Result<Json<Vec<VehicleUsage>>, AppError> {
    let controller = ReportController::new(&state);
    Ok(Json(controller.vehicle_usage().await?))
}

async fn refusals(State(state): State<AppState>) -> Result<Json<Vec<RefusalEntry>>, AppError> {
    let controller = ReportController::new(&state);
    Ok(Json(controller.refusals().await?))
}

async fn admin_dashboard(State(state): State<AppState>) -> Result<Json<AdminDashboard>, AppError> {
    let controller = ReportController::new(&state);
    Ok(Json(controller.admin_dashboard().await?))
}

async fn driver_dashboard(
    State(state): State<AppState>,
    session: Option<Extension<Session>>,
    Query(query): Query<DriverQuery>,
) -> Result<Json<DriverDashboard>, AppError> {
    let driver_id = resolve_driver_id(session.as_ref().map(|Extension(s)| s), query.driver_id)?;
    let controller = ReportController::new(&state);
    Ok(Json(controller.driver_dashboard(&driver_id).await?))
}

async fn driver_trips(
    State(state): State<AppState>,
    session: Option<Extension<Session>>,
    Query(query): Query<DriverQuery>,
) -> Result<Json<Vec<TripView>>, AppError> {
    let driver_id = resolve_driver_id(session.as_ref().map(|Extension(s)| s), query.driver_id)?;
    let controller = ReportController::new(&state);
    Ok(Json(controller.driver_trips(&driver_id).await?))
}
