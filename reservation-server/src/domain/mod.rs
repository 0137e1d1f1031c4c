//! Domain types for seat reservation.
//!
//! This module contains the value types the reservation core works with.
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod booking_reference;
mod reservation;
mod seat;
mod topology;
mod train_id;

pub use booking_reference::BookingReference;
pub use reservation::{ReservationRequest, ReservationResult, SeatRequest};
pub use seat::{InvalidSeatId, Seat, SeatId, compare_seat_numbers};
pub use topology::{DuplicateSeat, TrainTopology};
pub use train_id::{InvalidTrainId, TrainId};
