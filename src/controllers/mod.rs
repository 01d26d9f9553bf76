//! Controladores
//!
//! Orquestan repositorios y servicios para cada recurso del API.

pub mod auth_controller;
pub mod driver_controller;
pub mod report_controller;
pub mod trip_controller;
pub mod vehicle_controller;

pub use auth_controller::AuthController;
pub use driver_controller::DriverController;
pub use report_controller::ReportController;
pub use trip_controller::TripController;
pub use vehicle_controller::VehicleController;
