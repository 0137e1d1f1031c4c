//! Observability around the reservation contract.
//!
//! [`LoggingReserver`] wraps any [`SeatReserver`] and reports what happened
//! to a [`ReservationObserver`]. The wrapped reserver does no logging of its
//! own.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::domain::{ReservationResult, SeatRequest};

use super::finder::{ReserveError, SeatReserver};

/// Receives reservation events.
pub trait ReservationObserver {
    /// A request is about to be served.
    fn attempted(&self, request: &SeatRequest);

    /// Seats were reserved.
    fn succeeded(&self, request: &SeatRequest, result: &ReservationResult, elapsed: Duration);

    /// No seats could be reserved.
    fn declined(&self, request: &SeatRequest, elapsed: Duration);

    /// Serving the request failed.
    fn errored(&self, request: &SeatRequest, error: &ReserveError, elapsed: Duration);
}

impl<T: ReservationObserver + ?Sized> ReservationObserver for &T {
    fn attempted(&self, request: &SeatRequest) {
        (**self).attempted(request)
    }

    fn succeeded(&self, request: &SeatRequest, result: &ReservationResult, elapsed: Duration) {
        (**self).succeeded(request, result, elapsed)
    }

    fn declined(&self, request: &SeatRequest, elapsed: Duration) {
        (**self).declined(request, elapsed)
    }

    fn errored(&self, request: &SeatRequest, error: &ReserveError, elapsed: Duration) {
        (**self).errored(request, error, elapsed)
    }
}

/// Observer that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ReservationObserver for TracingObserver {
    fn attempted(&self, request: &SeatRequest) {
        debug!(
            train = %request.train_id,
            booking_reference = %request.booking_reference,
            seats = request.number_of_seats,
            "Reservation requested"
        );
    }

    fn succeeded(&self, request: &SeatRequest, result: &ReservationResult, elapsed: Duration) {
        let seats: Vec<String> = result.seats.iter().map(|s| s.to_string()).collect();
        info!(
            train = %request.train_id,
            booking_reference = %result.booking_reference,
            seats = ?seats,
            elapsed_us = elapsed.as_micros() as u64,
            "Seats reserved"
        );
    }

    fn declined(&self, request: &SeatRequest, elapsed: Duration) {
        info!(
            train = %request.train_id,
            booking_reference = %request.booking_reference,
            requested = request.number_of_seats,
            elapsed_us = elapsed.as_micros() as u64,
            "No seats available"
        );
    }

    fn errored(&self, request: &SeatRequest, error: &ReserveError, elapsed: Duration) {
        warn!(
            train = %request.train_id,
            booking_reference = %request.booking_reference,
            error = %error,
            elapsed_us = elapsed.as_micros() as u64,
            "Reservation failed"
        );
    }
}

/// A [`SeatReserver`] that reports each call to an observer.
pub struct LoggingReserver<R, O> {
    inner: R,
    observer: O,
}

impl<R: SeatReserver, O: ReservationObserver> LoggingReserver<R, O> {
    pub fn new(inner: R, observer: O) -> Self {
        Self { inner, observer }
    }
}

impl<R: SeatReserver, O: ReservationObserver> SeatReserver for LoggingReserver<R, O> {
    fn reserve(&self, request: &SeatRequest) -> Result<ReservationResult, ReserveError> {
        self.observer.attempted(request);
        let started = Instant::now();

        let outcome = self.inner.reserve(request);
        let elapsed = started.elapsed();

        match &outcome {
            Ok(result) if result.is_successful() => {
                self.observer.succeeded(request, result, elapsed)
            }
            Ok(_) => self.observer.declined(request, elapsed),
            Err(e) => self.observer.errored(request, e, elapsed),
        }

        outcome
    }
}
