//! Best-seat finder: the reservation algorithm.
//!
//! Given a seat request, the finder fetches the train's topology, applies the
//! occupancy policy to the whole train and then to each coach, and offers the
//! surviving single-coach candidates to the booking service one at a time.

use std::sync::Arc;

use crate::domain::{ReservationRequest, ReservationResult, SeatRequest, TrainId, TrainTopology};

use super::coaches::candidate_seat_sets;
use super::occupancy::OccupancyPolicy;

/// Errors from a train provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// No train with this id
    #[error("train {0} not found")]
    TrainNotFound(TrainId),

    /// The provider could not answer
    #[error("train data unavailable: {0}")]
    Unavailable(String),
}

/// Errors from a booking service.
///
/// A booking service that simply declines (seats taken) returns a failed
/// [`ReservationResult`], not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// The request named a train the booking service does not know
    #[error("train {0} not found")]
    UnknownTrain(TrainId),

    /// The request named a seat the train does not have
    #[error("train {train_id} has no seat {seat}")]
    UnknownSeat { train_id: TrainId, seat: String },

    /// The request was malformed
    #[error("invalid reservation request: {0}")]
    InvalidRequest(String),

    /// The booking service could not answer
    #[error("booking service unavailable: {0}")]
    Unavailable(String),
}

/// Errors from serving a seat request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReserveError {
    /// The seat request itself is invalid
    #[error("invalid seat request: {0}")]
    InvalidArgument(String),

    /// The requested train does not exist
    #[error("train {0} not found")]
    TrainNotFound(TrainId),

    /// The train provider failed
    #[error(transparent)]
    Provider(ProviderError),

    /// The booking service failed
    #[error(transparent)]
    Booking(#[from] BookingError),
}

impl From<ProviderError> for ReserveError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::TrainNotFound(id) => ReserveError::TrainNotFound(id),
            other => ReserveError::Provider(other),
        }
    }
}

/// Source of train topologies.
pub trait TrainProvider {
    /// A snapshot of the train's seats, or `TrainNotFound`.
    fn topology(&self, train_id: &TrainId) -> Result<TrainTopology, ProviderError>;
}

/// Commits seat reservations.
///
/// Implementations must be atomic: either every requested seat is assigned
/// to the booking, or none is and the result is failed.
pub trait BookingService {
    fn reserve(&self, request: &ReservationRequest) -> Result<ReservationResult, BookingError>;
}

/// The public reservation contract.
pub trait SeatReserver {
    fn reserve(&self, request: &SeatRequest) -> Result<ReservationResult, ReserveError>;
}

impl<T: TrainProvider + ?Sized> TrainProvider for &T {
    fn topology(&self, train_id: &TrainId) -> Result<TrainTopology, ProviderError> {
        (**self).topology(train_id)
    }
}

impl<T: TrainProvider + ?Sized> TrainProvider for Arc<T> {
    fn topology(&self, train_id: &TrainId) -> Result<TrainTopology, ProviderError> {
        (**self).topology(train_id)
    }
}

impl<T: BookingService + ?Sized> BookingService for &T {
    fn reserve(&self, request: &ReservationRequest) -> Result<ReservationResult, BookingError> {
        (**self).reserve(request)
    }
}

impl<T: BookingService + ?Sized> BookingService for Arc<T> {
    fn reserve(&self, request: &ReservationRequest) -> Result<ReservationResult, BookingError> {
        (**self).reserve(request)
    }
}

impl<T: SeatReserver + ?Sized> SeatReserver for &T {
    fn reserve(&self, request: &SeatRequest) -> Result<ReservationResult, ReserveError> {
        (**self).reserve(request)
    }
}

/// Finds and books the first acceptable block of seats in a single coach.
pub struct BestSeatFinder<'a, P: TrainProvider, B: BookingService> {
    provider: &'a P,
    booking: &'a B,
    policy: &'a OccupancyPolicy,
}

impl<'a, P: TrainProvider, B: BookingService> BestSeatFinder<'a, P, B> {
    pub fn new(provider: &'a P, booking: &'a B, policy: &'a OccupancyPolicy) -> Self {
        Self {
            provider,
            booking,
            policy,
        }
    }

    /// Try one candidate; a mismatched "success" counts as a decline.
    fn attempt(
        &self,
        request: ReservationRequest,
    ) -> Result<Option<ReservationResult>, BookingError> {
        let result = self.booking.reserve(&request)?;
        let accepted = result.is_successful()
            && result.train_id == request.train_id
            && result.seats == request.seats;
        Ok(accepted.then_some(result))
    }
}

impl<P: TrainProvider, B: BookingService> SeatReserver for BestSeatFinder<'_, P, B> {
    fn reserve(&self, request: &SeatRequest) -> Result<ReservationResult, ReserveError> {
        if request.number_of_seats == 0 {
            return Err(ReserveError::InvalidArgument(
                "number of seats must be positive".to_string(),
            ));
        }
        if request.booking_reference.is_empty() {
            return Err(ReserveError::InvalidArgument(
                "booking reference must not be empty".to_string(),
            ));
        }

        let topology = self.provider.topology(&request.train_id)?;
        if topology.train_id() != &request.train_id {
            return Err(ReserveError::Provider(ProviderError::Unavailable(format!(
                "asked for train {} but got {}",
                request.train_id,
                topology.train_id()
            ))));
        }
        let failed = || ReservationResult::failed(request.train_id.clone());

        if self
            .policy
            .is_over_occupied(topology.seats(), request.number_of_seats)
        {
            return Ok(failed());
        }

        for candidate in candidate_seat_sets(topology.seats(), request.number_of_seats, self.policy)
        {
            let attempt = ReservationRequest::new(
                request.train_id.clone(),
                request.booking_reference.clone(),
                candidate,
            );
            if let Some(result) = self.attempt(attempt)? {
                return Ok(result);
            }
        }

        Ok(failed())
    }
}

#[cfg(test)]
#[path = "finder_tests.rs"]
mod finder_tests;
