//! Política de asignación de conductores
//!
//! Un viaje nuevo se asigna al conductor disponible con menos viajes.
//! En empate gana el primero en el orden de la colección; no se guarda
//! estado de rotación.

use crate::models::Driver;

/// Elige el conductor para un viaje nuevo, o `None` si nadie está disponible
pub fn select_driver(drivers: &[Driver]) -> Option<&Driver> {
    drivers
        .iter()
        .filter(|driver| driver.is_available())
        .reduce(|best, candidate| {
            if best.total_trips <= candidate.total_trips {
                best
            } else {
                candidate
            }
        })
}
