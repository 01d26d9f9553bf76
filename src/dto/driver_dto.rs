use serde::Deserialize;
use validator::Validate;

use crate::models::DriverStatus;
use crate::utils::validation::{validate_cpf, validate_not_blank, validate_phone};

// Request para crear un conductor
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverRequest {
    #[validate(custom = "validate_not_blank", length(max = 120))]
    pub name: String,

    #[validate(custom = "validate_cpf")]
    pub cpf: String,

    #[validate(custom = "validate_not_blank", length(max = 20))]
    pub cnh: String,

    #[validate(custom = "validate_phone")]
    pub phone: String,

    #[validate(email)]
    pub email: String,

    pub status: Option<DriverStatus>,
}

// Request para actualizar un conductor
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverRequest {
    #[validate(custom = "validate_not_blank", length(max = 120))]
    pub name: Option<String>,

    #[validate(custom = "validate_cpf")]
    pub cpf: Option<String>,

    #[validate(custom = "validate_not_blank", length(max = 20))]
    pub cnh: Option<String>,

    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub status: Option<DriverStatus>,
}
