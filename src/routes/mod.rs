pub mod auth_routes;
pub mod driver_routes;
pub mod report_routes;
pub mod trip_routes;
pub mod vehicle_routes;
