use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::TripController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::trip_dto::{CompleteTripRequest, CreateTripRequest, RefuseTripRequest, TripFilters};
use crate::models::reference::TripView;
use crate::models::Trip;
use crate::services::trip_lifecycle::TripCommand;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trips).post(create_trip))
        .route("/:id", get(get_trip))
        .route("/:id/accept", post(accept_trip))
        .route("/:id/refuse", post(refuse_trip))
        .route("/:id/start", post(start_trip))
        .route("/:id/complete", post(complete_trip))
}

async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<CreateTripRequest>,
) -> Result<Json<ApiResponse<TripView>>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_trips(
    State(state): State<AppState>,
    Query(filters): Query<TripFilters>,
) -> Result<Json<Vec<TripView>>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.list(&filters).await?;
    Ok(Json(response))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TripView>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn accept_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Trip>>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.apply(&id, TripCommand::Accept).await?;
    Ok(Json(response))
}

async fn refuse_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RefuseTripRequest>,
) -> Result<Json<ApiResponse<Trip>>, AppError> {
    let controller = TripController::new(&state);
    let command = TripCommand::Refuse {
        reason: request.reason,
    };
    let response = controller.apply(&id, command).await?;
    Ok(Json(response))
}

async fn start_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Trip>>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.apply(&id, TripCommand::Start).await?;
    Ok(Json(response))
}

// El cuerpo es opcional: sin kilometraje final se completa igual.
// Un cuerpo presente pero inválido se rechaza sin tocar el viaje.
async fn complete_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<ApiResponse<Trip>>, AppError> {
    let request = parse_complete_request(&body)?;
    let controller = TripController::new(&state);
    let command = TripCommand::Complete {
        final_km: request.final_km,
    };
    let response = controller.apply(&id, command).await?;
    Ok(Json(response))
}

fn parse_complete_request(body: &[u8]) -> Result<CompleteTripRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CompleteTripRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Cuerpo inválido para completar el viaje: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_completes_without_mileage() {
        assert_eq!(parse_complete_request(b"").unwrap().final_km, None);
        assert_eq!(parse_complete_request(b"  \n").unwrap().final_km, None);
        assert_eq!(parse_complete_request(br#"{"finalKm": 1250}"#).unwrap().final_km, Some(1250));
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        let bodies: [&[u8]; 3] = [br#"{"finalKm":"1250"}"#, br#"{"finalKm":-5}"#, b"finalKm=1250"];
        for body in bodies {
            assert!(matches!(parse_complete_request(body), Err(AppError::BadRequest(_))));
        }
    }
}
