//! Repositorios
//!
//! Acceso tipado a las colecciones del almacén de entidades.

pub mod collection;
pub mod driver_repository;
pub mod session_repository;
pub mod trip_repository;
pub mod vehicle_repository;

pub use collection::Collection;
pub use driver_repository::DriverRepository;
pub use session_repository::SessionRepository;
pub use trip_repository::TripRepository;
pub use vehicle_repository::VehicleRepository;
