//! Constructores de entidades para tests

use chrono::{TimeZone, Utc};

use super::{Driver, DriverStatus, Trip, TripStatus, Vehicle, VehicleStatus};

pub fn driver(id: &str, total_trips: u32, status: DriverStatus) -> Driver {
    Driver {
        id: id.to_string(),
        name: format!("Conductor {}", id),
        cpf: "123.456.789-01".to_string(),
        cnh: format!("CNH-{}", id),
        phone: "(11) 99999-0000".to_string(),
        email: format!("{}@empresa.com", id),
        status,
        total_trips,
        refused_trips: 0,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
    }
}

pub fn vehicle(id: &str, current_km: u64, status: VehicleStatus) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        model: format!("Modelo {}", id),
        plate: "ABC1D23".to_string(),
        current_km,
        status,
        driver_id: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
    }
}

pub fn trip(id: &str, driver_id: Option<&str>, vehicle_id: Option<&str>, status: TripStatus) -> Trip {
    let at = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
    Trip {
        id: id.to_string(),
        origin: "São Paulo - SP".to_string(),
        destination: "Rio de Janeiro - RJ".to_string(),
        date: at,
        driver_id: driver_id.map(str::to_string),
        vehicle_id: vehicle_id.map(str::to_string),
        status,
        refusal_reason: if status == TripStatus::Refused {
            Some("cliente canceló".to_string())
        } else {
            None
        },
        initial_km: None,
        final_km: None,
        created_at: at,
        updated_at: at,
    }
}
