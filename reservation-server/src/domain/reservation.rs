//! Reservation request and result types.

use std::collections::BTreeSet;

use super::{BookingReference, SeatId, TrainId};

/// A request for some number of seats on a train, for one booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRequest {
    pub train_id: TrainId,
    pub booking_reference: BookingReference,
    /// Size of the party. Zero is rejected when the request is served.
    pub number_of_seats: u32,
}

impl SeatRequest {
    pub fn new(
        train_id: TrainId,
        booking_reference: BookingReference,
        number_of_seats: u32,
    ) -> Self {
        Self {
            train_id,
            booking_reference,
            number_of_seats,
        }
    }
}

/// A request to commit a specific set of seats to a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub train_id: TrainId,
    pub booking_reference: BookingReference,
    pub seats: BTreeSet<SeatId>,
}

impl ReservationRequest {
    /// Create a request; duplicate seat ids collapse.
    pub fn new(
        train_id: TrainId,
        booking_reference: BookingReference,
        seats: impl IntoIterator<Item = SeatId>,
    ) -> Self {
        Self {
            train_id,
            booking_reference,
            seats: seats.into_iter().collect(),
        }
    }
}

/// Outcome of a reservation attempt.
///
/// A result is successful exactly when its booking reference is non-empty.
/// Failed results always carry an empty seat set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationResult {
    pub train_id: TrainId,
    pub booking_reference: BookingReference,
    pub seats: BTreeSet<SeatId>,
}

impl ReservationResult {
    /// A successful reservation of `seats` under `booking_reference`.
    ///
    /// Passing an empty reference yields a failed result with no seats.
    pub fn reserved(
        train_id: TrainId,
        booking_reference: BookingReference,
        seats: impl IntoIterator<Item = SeatId>,
    ) -> Self {
        if booking_reference.is_empty() {
            return Self::failed(train_id);
        }
        Self {
            train_id,
            booking_reference,
            seats: seats.into_iter().collect(),
        }
    }

    /// A failed reservation: empty reference, no seats.
    pub fn failed(train_id: TrainId) -> Self {
        Self {
            train_id,
            booking_reference: BookingReference::none(),
            seats: BTreeSet::new(),
        }
    }

    pub fn is_successful(&self) -> bool {
        !self.booking_reference.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train() -> TrainId {
        TrainId::new("express_2000").unwrap()
    }

    fn seat(code: &str) -> SeatId {
        SeatId::parse(code).unwrap()
    }

    #[test]
    fn request_seats_collapse_duplicates() {
        let request = ReservationRequest::new(
            train(),
            BookingReference::new("abc"),
            vec![seat("2A"), seat("1A"), seat("2A")],
        );
        let codes: Vec<String> = request.seats.iter().map(|s| s.to_string()).collect();
        assert_eq!(codes, vec!["1A", "2A"]);
    }

    #[test]
    fn reserved_is_successful() {
        let result =
            ReservationResult::reserved(train(), BookingReference::new("abc"), vec![seat("1A")]);
        assert!(result.is_successful());
        assert_eq!(result.seats.len(), 1);
    }

    #[test]
    fn failed_has_no_seats() {
        let result = ReservationResult::failed(train());
        assert!(!result.is_successful());
        assert!(result.seats.is_empty());
        assert!(result.booking_reference.is_empty());
    }

    #[test]
    fn reserved_with_empty_reference_is_failed() {
        let result =
            ReservationResult::reserved(train(), BookingReference::none(), vec![seat("1A")]);
        assert_eq!(result, ReservationResult::failed(train()));
    }
}
