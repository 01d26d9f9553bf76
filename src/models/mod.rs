//! Modelos del sistema
//!
//! Este módulo contiene las entidades de la flota (conductores, vehículos,
//! viajes), la sesión y las proyecciones de reportes. Las tres colecciones
//! viven por separado y se referencian por id sin propiedad.

pub mod analytics;
pub mod auth;
pub mod driver;
pub mod reference;
pub mod trip;
pub mod vehicle;

#[cfg(test)]
pub(crate) mod fixtures;

pub use driver::{Driver, DriverStatus};
pub use trip::{Trip, TripEvent, TripStatus};
pub use vehicle::{Vehicle, VehicleStatus};

/// Entidades direccionables por identidad dentro de su colección
pub trait Identified {
    fn id(&self) -> &str;
}
