//! Reservation Model

use serde::{Deserialize, Serialize};

/// Reservation status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Confirmed,
    #[default]
    Pending,
    Cancelled,
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub customer_name: String,
    /// Positive party size
    pub party_size: i32,
    /// RFC 3339 timestamp of the booking slot
    pub time: String,
    pub status: ReservationStatus,
    pub notes: Option<String>,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub customer_name: String,
    pub party_size: i32,
    pub time: String,
    pub notes: Option<String>,
}

/// Update reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationUpdate {
    pub customer_name: Option<String>,
    pub party_size: Option<i32>,
    pub time: Option<String>,
    pub status: Option<ReservationStatus>,
    pub notes: Option<String>,
}
