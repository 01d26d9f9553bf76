//! Services module
//!
//! Este módulo contiene la lógica de negocio: la política de asignación,
//! el ciclo de vida de los viajes, las proyecciones de reportes y la
//! autenticación. Las tres primeras son funciones puras sobre las
//! colecciones; la persistencia queda en los repositorios.

pub mod analytics_service;
pub mod assignment_service;
pub mod auth_service;
pub mod trip_lifecycle;

pub use assignment_service::select_driver;
pub use auth_service::{Authenticator, MockAuthenticator};
