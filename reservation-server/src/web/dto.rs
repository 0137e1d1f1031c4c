//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::ReservationResult;

/// Request to reserve seats for a party.
#[derive(Debug, Deserialize)]
pub struct ReserveRequest {
    /// Train to book on
    pub train_id: String,

    /// Size of the party; must be positive
    pub seat_count: i64,

    /// Booking reference to use; one is generated when absent or empty
    #[serde(default)]
    pub booking_reference: Option<String>,
}

/// Outcome of a reservation.
///
/// A failed reservation has an empty `booking_reference` and no seats.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReserveResponse {
    pub train_id: String,
    pub booking_reference: String,
    /// Seat codes, e.g. `"1A"`
    pub seats: Vec<String>,
}

impl ReserveResponse {
    pub fn from_result(result: &ReservationResult) -> Self {
        Self {
            train_id: result.train_id.to_string(),
            booking_reference: result.booking_reference.to_string(),
            seats: result.seats.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
