use std::sync::Arc;

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::Utc;
use serde_json::{json, Value};

use fleet_dispatch::cache::{EntityStore, MemoryStore, StoreExt, DRIVERS_KEY, VEHICLES_KEY};
use fleet_dispatch::config::environment::EnvironmentConfig;
use fleet_dispatch::create_app;
use fleet_dispatch::models::{Driver, DriverStatus, Vehicle, VehicleStatus};
use fleet_dispatch::services::auth_service::MockAuthenticator;
use fleet_dispatch::state::AppState;

fn driver(id: &str, total_trips: u32, status: DriverStatus) -> Driver {
    Driver {
        id: id.to_string(),
        name: format!("Conductor {}", id),
        cpf: "123.456.789-09".to_string(),
        cnh: "12345678900".to_string(),
        phone: "11987654321".to_string(),
        email: format!("{}@empresa.com", id.to_lowercase()),
        status,
        total_trips,
        refused_trips: 0,
        created_at: Utc::now(),
    }
}

fn vehicle(id: &str, current_km: u64) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        model: "Fiat Ducato".to_string(),
        plate: format!("ABC-{}", id),
        current_km,
        status: VehicleStatus::Available,
        driver_id: None,
        created_at: Utc::now(),
    }
}

async fn create_test_server(drivers: &[Driver], vehicles: &[Vehicle]) -> TestServer {
    create_test_server_with(EnvironmentConfig::default(), drivers, vehicles).await
}

async fn create_test_server_with(
    config: EnvironmentConfig,
    drivers: &[Driver],
    vehicles: &[Vehicle],
) -> TestServer {
    let store = MemoryStore::new();
    store.set(DRIVERS_KEY, drivers).await.unwrap();
    store.set(VEHICLES_KEY, vehicles).await.unwrap();

    let store: Arc<dyn EntityStore> = Arc::new(store);
    let state = AppState::new(
        config,
        store,
        Arc::new(MockAuthenticator::new()),
    );
    TestServer::new(create_app(state)).unwrap()
}

fn trip_body() -> Value {
    json!({
        "origin": "Av. Paulista, 1000",
        "destination": "Rua Augusta, 500",
        "date": "2025-03-10T09:00:00Z"
    })
}

async fn create_trip(server: &TestServer) -> Value {
    let response = server.post("/api/trips").json(&trip_body()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    body["data"].clone()
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(&[], &[]).await;
    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}

#[tokio::test]
async fn test_trip_goes_to_driver_with_fewest_trips() {
    let server = create_test_server(
        &[
            driver("A", 3, DriverStatus::Available),
            driver("B", 1, DriverStatus::Available),
        ],
        &[],
    )
    .await;

    let trip = create_trip(&server).await;
    assert_eq!(trip["driverId"], "B");
    assert_eq!(trip["status"], "pending");
    assert_eq!(trip["driverLabel"], "Conductor B");

    // El contador del conductor asignado se incrementa
    let drivers: Value = server.get("/api/drivers").await.json();
    let b = drivers
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["id"] == "B")
        .unwrap();
    assert_eq!(b["totalTrips"], 2);
}

#[tokio::test]
async fn test_create_trip_without_available_driver() {
    let server = create_test_server(&[driver("A", 0, DriverStatus::Unavailable)], &[]).await;

    let response = server.post("/api/trips").json(&trip_body()).await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["code"], "NO_AVAILABLE_DRIVER");

    let trips: Value = server.get("/api/trips").await.json();
    assert_eq!(trips.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_trip_with_unknown_vehicle() {
    let server = create_test_server(&[driver("A", 0, DriverStatus::Available)], &[]).await;

    let mut body = trip_body();
    body["vehicleId"] = json!("vehicle-404");
    let response = server.post("/api/trips").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["code"], "VEHICLE_UNAVAILABLE");
}

#[tokio::test]
async fn test_refuse_with_blank_reason_keeps_trip_pending() {
    let server = create_test_server(&[driver("A", 0, DriverStatus::Available)], &[]).await;
    let trip = create_trip(&server).await;
    let id = trip["id"].as_str().unwrap();

    let response = server
        .post(&format!("/api/trips/{}/refuse", id))
        .json(&json!({ "reason": "   " }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "EMPTY_REFUSAL_REASON");

    let stored: Value = server.get(&format!("/api/trips/{}", id)).await.json();
    assert_eq!(stored["status"], "pending");
    assert!(stored["refusalReason"].is_null());
}

#[tokio::test]
async fn test_refuse_records_reason_and_counter() {
    let server = create_test_server(&[driver("A", 0, DriverStatus::Available)], &[]).await;
    let trip = create_trip(&server).await;
    let id = trip["id"].as_str().unwrap();

    let response = server
        .post(&format!("/api/trips/{}/refuse", id))
        .json(&json!({ "reason": "client cancelled" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["status"], "refused");
    assert_eq!(body["data"]["refusalReason"], "client cancelled");

    let a: Value = server.get("/api/drivers/A").await.json();
    assert_eq!(a["refusedTrips"], 1);

    let refusals: Value = server.get("/api/reports/refusals").await.json();
    assert_eq!(refusals[0]["reason"], "client cancelled");
}

#[tokio::test]
async fn test_full_lifecycle_updates_fleet() {
    let server = create_test_server(
        &[driver("A", 0, DriverStatus::Available)],
        &[vehicle("V1", 1000)],
    )
    .await;

    let mut body = trip_body();
    body["vehicleId"] = json!("V1");
    let response = server.post("/api/trips").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let created: Value = response.json();
    let id = created["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["data"]["vehicleLabel"], "Fiat Ducato (ABC-V1)");

    let accepted = server.post(&format!("/api/trips/{}/accept", id)).await;
    assert_eq!(accepted.status_code(), StatusCode::OK);

    let started: Value = server.post(&format!("/api/trips/{}/start", id)).await.json();
    assert_eq!(started["data"]["status"], "in_progress");
    assert_eq!(started["data"]["initialKm"], 1000);

    let a: Value = server.get("/api/drivers/A").await.json();
    assert_eq!(a["status"], "on_trip");
    let v1: Value = server.get("/api/vehicles/V1").await.json();
    assert_eq!(v1["status"], "on_trip");

    let completed: Value = server
        .post(&format!("/api/trips/{}/complete", id))
        .json(&json!({ "finalKm": 1150 }))
        .await
        .json();
    assert_eq!(completed["data"]["status"], "completed");
    assert_eq!(completed["data"]["finalKm"], 1150);

    let a: Value = server.get("/api/drivers/A").await.json();
    assert_eq!(a["status"], "available");
    let v1: Value = server.get("/api/vehicles/V1").await.json();
    assert_eq!(v1["status"], "available");
    assert_eq!(v1["currentKm"], 1150);

    let usage: Value = server.get("/api/reports/vehicles").await.json();
    assert_eq!(usage[0]["completedTrips"], 1);
}

#[tokio::test]
async fn test_complete_twice_is_rejected() {
    let server = create_test_server(&[driver("A", 0, DriverStatus::Available)], &[]).await;
    let trip = create_trip(&server).await;
    let id = trip["id"].as_str().unwrap();

    server.post(&format!("/api/trips/{}/start", id)).await;
    let first = server.post(&format!("/api/trips/{}/complete", id)).await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let before: Value = server.get(&format!("/api/trips/{}", id)).await.json();
    let second = server.post(&format!("/api/trips/{}/complete", id)).await;
    assert_eq!(second.status_code(), StatusCode::CONFLICT);
    let body: Value = second.json();
    assert_eq!(body["code"], "INVALID_TRANSITION");

    let after: Value = server.get(&format!("/api/trips/{}", id)).await.json();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_unknown_trip_transition() {
    let server = create_test_server(&[], &[]).await;
    let response = server.post("/api/trips/trip-404/accept").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_driver_leaves_dangling_label() {
    let server = create_test_server(&[driver("A", 0, DriverStatus::Available)], &[]).await;
    let trip = create_trip(&server).await;
    let id = trip["id"].as_str().unwrap();

    let deleted = server.delete("/api/drivers/A").await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    let view: Value = server.get(&format!("/api/trips/{}", id)).await.json();
    assert_eq!(view["driverId"], "A");
    assert_eq!(view["driverLabel"], "Conductor no encontrado");
    assert_eq!(view["danglingDriver"], true);
    assert_eq!(view["vehicleLabel"], "Sin asignar");
}

#[tokio::test]
async fn test_report_summary_rates() {
    let server = create_test_server(&[driver("A", 0, DriverStatus::Available)], &[]).await;

    // 2 completados, 1 rechazado, 1 pendiente
    let mut ids = Vec::new();
    for _ in 0..4 {
        let trip = create_trip(&server).await;
        ids.push(trip["id"].as_str().unwrap().to_string());
    }
    for id in &ids[..2] {
        server.post(&format!("/api/trips/{}/start", id)).await;
        server.post(&format!("/api/trips/{}/complete", id)).await;
    }
    server
        .post(&format!("/api/trips/{}/refuse", ids[2]))
        .json(&json!({ "reason": "pneu furado" }))
        .await;

    let summary: Value = server.get("/api/reports/summary").await.json();
    assert_eq!(summary["rates"]["totalTrips"], 4);
    assert_eq!(summary["rates"]["completionRateLabel"], "50.0");
    assert_eq!(summary["rates"]["refusalRateLabel"], "25.0");

    let top: Value = server.get("/api/reports/top-drivers").await.json();
    assert_eq!(top[0]["driverId"], "A");
    assert_eq!(top[0]["completedTrips"], 2);
}

#[tokio::test]
async fn test_driver_crud_and_validation() {
    let server = create_test_server(&[], &[]).await;

    let invalid = server
        .post("/api/drivers")
        .json(&json!({
            "name": "  ",
            "cpf": "123",
            "cnh": "12345678900",
            "phone": "11987654321",
            "email": "no-es-email"
        }))
        .await;
    assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

    let created: Value = server
        .post("/api/drivers")
        .json(&json!({
            "name": "Maria Souza",
            "cpf": "123.456.789-09",
            "cnh": "12345678900",
            "phone": "(11) 98765-4321",
            "email": "maria@empresa.com"
        }))
        .await
        .json();
    let driver = &created["data"];
    assert_eq!(driver["status"], "available");
    assert_eq!(driver["totalTrips"], 0);
    let id = driver["id"].as_str().unwrap();
    assert!(id.starts_with("driver-"));

    let updated: Value = server
        .put(&format!("/api/drivers/{}", id))
        .json(&json!({ "status": "unavailable" }))
        .await
        .json();
    assert_eq!(updated["data"]["status"], "unavailable");
    assert_eq!(updated["data"]["name"], "Maria Souza");

    let missing = server.get("/api/drivers/driver-404").await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vehicle_plate_is_normalized_and_unique() {
    let server = create_test_server(&[], &[]).await;

    let created: Value = server
        .post("/api/vehicles")
        .json(&json!({ "model": "Renault Master", "plate": " xyz-1234 ", "currentKm": 500 }))
        .await
        .json();
    assert_eq!(created["data"]["plate"], "XYZ-1234");

    let duplicate = server
        .post("/api/vehicles")
        .json(&json!({ "model": "Renault Master", "plate": "XYZ-1234" }))
        .await;
    assert_eq!(duplicate.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_and_driver_dashboard() {
    let server = create_test_server(&[driver("A", 0, DriverStatus::Available)], &[]).await;
    create_trip(&server).await;

    let login: Value = server
        .post("/api/auth/login")
        .json(&json!({ "role": "driver", "driverId": "A" }))
        .await
        .json();
    let token = login["data"]["token"].as_str().unwrap().to_string();
    assert_eq!(login["data"]["session"]["role"], "driver");

    let me = server
        .get("/api/auth/me")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(me.status_code(), StatusCode::OK);
    let me: Value = me.json();
    assert_eq!(me["driverId"], "A");

    let dashboard: Value = server
        .get("/api/driver/dashboard")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await
        .json();
    assert_eq!(dashboard["driverId"], "A");
    assert_eq!(dashboard["pending"].as_array().unwrap().len(), 1);

    let logout = server
        .post("/api/auth/logout")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(logout.status_code(), StatusCode::OK);

    let me = server
        .get("/api/auth/me")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(me.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_driver_dashboard_without_session() {
    let server = create_test_server(&[], &[]).await;
    let response = server.get("/api/driver/trips").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_dashboard_counts() {
    let server = create_test_server(
        &[
            driver("A", 0, DriverStatus::Available),
            driver("B", 0, DriverStatus::Unavailable),
        ],
        &[vehicle("V1", 0)],
    )
    .await;
    create_trip(&server).await;

    let dashboard: Value = server.get("/api/dashboard/admin").await.json();
    assert_eq!(dashboard["totalDrivers"], 2);
    assert_eq!(dashboard["availableDrivers"], 1);
    assert_eq!(dashboard["activeDrivers"], 1);
    assert_eq!(dashboard["totalVehicles"], 1);
    assert_eq!(dashboard["pendingTrips"], 1);
}

#[tokio::test]
async fn test_complete_with_malformed_body_keeps_trip_in_progress() {
    let server = create_test_server(
        &[driver("A", 0, DriverStatus::Available)],
        &[vehicle("V1", 1000)],
    )
    .await;

    let mut body = trip_body();
    body["vehicleId"] = json!("V1");
    let created: Value = server.post("/api/trips").json(&body).await.json();
    let id = created["data"]["id"].as_str().unwrap().to_string();
    server.post(&format!("/api/trips/{}/start", id)).await;

    let response = server
        .post(&format!("/api/trips/{}/complete", id))
        .json(&json!({ "finalKm": "x" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let stored: Value = server.get(&format!("/api/trips/{}", id)).await.json();
    assert_eq!(stored["status"], "in_progress");
    let v1: Value = server.get("/api/vehicles/V1").await.json();
    assert_eq!(v1["status"], "on_trip");
    assert_eq!(v1["currentKm"], 1000);
}

#[tokio::test]
async fn test_driver_stays_on_trip_while_another_trip_runs() {
    let server = create_test_server(&[driver("A", 0, DriverStatus::Available)], &[]).await;
    let first = create_trip(&server).await;
    let second = create_trip(&server).await;
    let first = first["id"].as_str().unwrap();
    let second = second["id"].as_str().unwrap();

    server.post(&format!("/api/trips/{}/start", first)).await;
    server.post(&format!("/api/trips/{}/start", second)).await;
    let done = server.post(&format!("/api/trips/{}/complete", first)).await;
    assert_eq!(done.status_code(), StatusCode::OK);

    let a: Value = server.get("/api/drivers/A").await.json();
    assert_eq!(a["status"], "on_trip");

    server.post(&format!("/api/trips/{}/complete", second)).await;
    let a: Value = server.get("/api/drivers/A").await.json();
    assert_eq!(a["status"], "available");
}

#[tokio::test]
async fn test_lifecycle_without_fleet_sync_leaves_fleet_untouched() {
    let config = EnvironmentConfig {
        fleet_sync: false,
        ..EnvironmentConfig::default()
    };
    let server = create_test_server_with(
        config,
        &[driver("A", 0, DriverStatus::Available)],
        &[vehicle("V1", 1000)],
    )
    .await;

    let mut body = trip_body();
    body["vehicleId"] = json!("V1");
    let created: Value = server.post("/api/trips").json(&body).await.json();
    let completed_id = created["data"]["id"].as_str().unwrap().to_string();

    let started: Value = server
        .post(&format!("/api/trips/{}/start", completed_id))
        .await
        .json();
    assert_eq!(started["data"]["status"], "in_progress");
    assert!(started["data"]["initialKm"].is_null());

    let a: Value = server.get("/api/drivers/A").await.json();
    assert_eq!(a["status"], "available");
    let v1: Value = server.get("/api/vehicles/V1").await.json();
    assert_eq!(v1["status"], "available");

    let completed: Value = server
        .post(&format!("/api/trips/{}/complete", completed_id))
        .json(&json!({ "finalKm": 1200 }))
        .await
        .json();
    assert_eq!(completed["data"]["status"], "completed");

    let refused = create_trip(&server).await;
    let response = server
        .post(&format!("/api/trips/{}/refuse", refused["id"].as_str().unwrap()))
        .json(&json!({ "reason": "sem combustível" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let a: Value = server.get("/api/drivers/A").await.json();
    assert_eq!(a["status"], "available");
    assert_eq!(a["totalTrips"], 0);
    assert_eq!(a["refusedTrips"], 0);
    let v1: Value = server.get("/api/vehicles/V1").await.json();
    assert_eq!(v1["status"], "available");
    assert_eq!(v1["currentKm"], 1000);
}
