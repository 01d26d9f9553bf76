//! Modelo de Trip
//!
//! Este módulo contiene el struct Trip, sus estados y la tabla de
//! transiciones del ciclo de vida. `TripStatus::apply` es la única fuente
//! de verdad sobre qué transiciones son legales.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Identified;

/// Estado del viaje
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Pending,
    Accepted,
    Refused,
    InProgress,
    Completed,
}

/// Eventos que hacen avanzar el ciclo de vida de un viaje
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TripEvent {
    Accept,
    Refuse,
    Start,
    Complete,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Pending => "pending",
            TripStatus::Accepted => "accepted",
            TripStatus::Refused => "refused",
            TripStatus::InProgress => "in_progress",
            TripStatus::Completed => "completed",
        }
    }

    /// Estado destino para `event`, o `None` si la transición no es legal.
    ///
    /// `accepted` es opcional: un viaje puede iniciarse directamente desde
    /// `pending`.
    pub fn apply(self, event: TripEvent) -> Option<TripStatus> {
        match (self, event) {
            (TripStatus::Pending, TripEvent::Accept) => Some(TripStatus::Accepted),
            (TripStatus::Pending, TripEvent::Refuse) => Some(TripStatus::Refused),
            (TripStatus::Pending | TripStatus::Accepted, TripEvent::Start) => {
                Some(TripStatus::InProgress)
            }
            (TripStatus::InProgress, TripEvent::Complete) => Some(TripStatus::Completed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TripStatus::Refused | TripStatus::Completed)
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TripEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripEvent::Accept => "accept",
            TripEvent::Refuse => "refuse",
            TripEvent::Start => "start",
            TripEvent::Complete => "complete",
        }
    }
}

impl fmt::Display for TripEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Viaje de despacho
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    pub status: TripStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refusal_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_km: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_km: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identified for Trip {
    fn id(&self) -> &str {
        &self.id
    }
}
