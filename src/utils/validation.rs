//! Utilidades de validación
//!
//! Validadores personalizados usados por los DTOs con `validator`.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// CPF: 11 dígitos, con o sin puntuación (000.000.000-00)
    static ref CPF_REGEX: Regex = Regex::new(r"^[0-9]{3}\.?[0-9]{3}\.?[0-9]{3}-?[0-9]{2}$").unwrap();
}

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de CPF
pub fn validate_cpf(value: &str) -> Result<(), ValidationError> {
    if !CPF_REGEX.is_match(value.trim()) {
        let mut error = ValidationError::new("cpf");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"000.000.000-00".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if !(8..=15).contains(&digits) {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
