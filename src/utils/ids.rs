//! Generación de identificadores
//!
//! Los ids tienen la forma `<tipo>-<milisegundos>`. Dentro de un proceso
//! son monótonos: si el reloj no avanzó, se usa el último valor más uno.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Siguiente marca en milisegundos, estrictamente creciente
fn next_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ISSUED.load(Ordering::Relaxed);
    loop {
        let candidate = if now > last { now } else { last + 1 };
        match LAST_ISSUED.compare_exchange_weak(last, candidate, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

/// Genera un id `<kind>-<millis>` único dentro de la sesión
pub fn generate_id(kind: &str) -> String {
    format!("{}-{}", kind, next_millis())
}
