//! DTOs de la API
//!
//! Requests y responses del API HTTP.

pub mod auth_dto;
pub mod common_dto;
pub mod driver_dto;
pub mod trip_dto;
pub mod vehicle_dto;
