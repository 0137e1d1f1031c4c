//! Seat allocation for group bookings.
//!
//! This module implements the core reservation algorithm that answers:
//! "Which seats can this party have on this train?"
//!
//! The whole party is seated in one coach, and neither the train nor the
//! chosen coach may already be too full. Candidates are offered to the
//! booking service one coach at a time until one is accepted.

mod coaches;
mod finder;
mod logging;
mod occupancy;

pub use coaches::{Coach, candidate_seat_sets, partition_by_coach};
pub use finder::{
    BestSeatFinder, BookingError, BookingService, ProviderError, ReserveError, SeatReserver,
    TrainProvider,
};
pub use logging::{LoggingReserver, ReservationObserver, TracingObserver};
pub use occupancy::{DEFAULT_MAX_OCCUPANCY_PERCENT, OccupancyPolicy};
