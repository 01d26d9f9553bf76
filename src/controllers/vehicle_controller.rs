use chrono::Utc;
use tracing::info;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::vehicle::normalize_plate;
use crate::models::Vehicle;
use crate::repositories::VehicleRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::ids::generate_id;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: state.vehicles(),
        }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;

        // Verificar que la matrícula no exista
        let plate = normalize_plate(&request.plate);
        if self.repository.plate_exists(&plate, None).await? {
            return Err(AppError::Conflict("La matrícula ya está registrada".to_string()));
        }

        let vehicle = Vehicle {
            id: generate_id("vehicle"),
            model: request.model.trim().to_string(),
            plate,
            current_km: request.current_km,
            status: request.status.unwrap_or_default(),
            driver_id: request.driver_id.filter(|id| !id.trim().is_empty()),
            created_at: Utc::now(),
        };

        let vehicle = self.repository.create(vehicle).await?;
        info!("🚗 Vehículo creado: {}", vehicle.display_label());

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repository.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Vehicle, AppError> {
        self.repository.get(id).await
    }

    pub async fn update(&self, id: &str, request: UpdateVehicleRequest) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;

        let mut vehicle = self.repository.get(id).await?;
        if let Some(plate) = request.plate {
            let plate = normalize_plate(&plate);
            if self.repository.plate_exists(&plate, Some(id)).await? {
                return Err(AppError::Conflict("La matrícula ya está registrada".to_string()));
            }
            vehicle.plate = plate;
        }
        if let Some(model) = request.model {
            vehicle.model = model.trim().to_string();
        }
        if let Some(current_km) = request.current_km {
            vehicle.current_km = current_km;
        }
        if let Some(status) = request.status {
            vehicle.status = status;
        }
        if let Some(driver_id) = request.driver_id {
            vehicle.driver_id = Some(driver_id).filter(|id| !id.trim().is_empty());
        }

        let vehicle = self.repository.update(vehicle).await?;
        info!("🚗 Vehículo actualizado: {}", vehicle.id);

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        info!("🗑️ Vehículo eliminado: {}", id);
        Ok(())
    }
}
