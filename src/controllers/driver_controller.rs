use chrono::Utc;
use tracing::info;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::driver_dto::{CreateDriverRequest, UpdateDriverRequest};
use crate::models::Driver;
use crate::repositories::DriverRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::ids::generate_id;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: state.drivers(),
        }
    }

    pub async fn create(&self, request: CreateDriverRequest) -> Result<ApiResponse<Driver>, AppError> {
        request.validate()?;

        let driver = Driver {
            id: generate_id("driver"),
            name: request.name.trim().to_string(),
            cpf: request.cpf.trim().to_string(),
            cnh: request.cnh.trim().to_string(),
            phone: request.phone.trim().to_string(),
            email: request.email.trim().to_string(),
            status: request.status.unwrap_or_default(),
            total_trips: 0,
            refused_trips: 0,
            created_at: Utc::now(),
        };

        let driver = self.repository.create(driver).await?;
        info!("👤 Conductor creado: {} ({})", driver.name, driver.id);

        Ok(ApiResponse::success_with_message(
            driver,
            "Conductor creado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<Driver>, AppError> {
        self.repository.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Driver, AppError> {
        self.repository.get(id).await
    }

    pub async fn update(&self, id: &str, request: UpdateDriverRequest) -> Result<ApiResponse<Driver>, AppError> {
        request.validate()?;

        let mut driver = self.repository.get(id).await?;
        if let Some(name) = request.name {
            driver.name = name.trim().to_string();
        }
        if let Some(cpf) = request.cpf {
            driver.cpf = cpf.trim().to_string();
        }
        if let Some(cnh) = request.cnh {
            driver.cnh = cnh.trim().to_string();
        }
        if let Some(phone) = request.phone {
            driver.phone = phone.trim().to_string();
        }
        if let Some(email) = request.email {
            driver.email = email.trim().to_string();
        }
        if let Some(status) = request.status {
            driver.status = status;
        }

        let driver = self.repository.update(driver).await?;
        info!("👤 Conductor actualizado: {}", driver.id);

        Ok(ApiResponse::success_with_message(
            driver,
            "Conductor actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        info!("🗑️ Conductor eliminado: {}", id);
        Ok(())
    }
}
