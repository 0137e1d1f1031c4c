//! Train topology snapshot.

use std::collections::HashSet;

use super::{Seat, SeatId, TrainId};

/// Error returned when a topology would contain the same seat twice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("seat {0} appears more than once in the topology")]
pub struct DuplicateSeat(pub SeatId);

/// The seat layout and occupancy of one train at one point in time.
///
/// Seats keep the order the provider supplied them in; seat ids are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTopology {
    train_id: TrainId,
    seats: Vec<Seat>,
}

impl TrainTopology {
    /// Build a topology, rejecting duplicate seat ids.
    pub fn new(train_id: TrainId, seats: Vec<Seat>) -> Result<Self, DuplicateSeat> {
        let mut seen = HashSet::with_capacity(seats.len());
        for seat in &seats {
            if !seen.insert(seat.id()) {
                return Err(DuplicateSeat(seat.id().clone()));
            }
        }
        Ok(Self { train_id, seats })
    }

    pub fn train_id(&self) -> &TrainId {
        &self.train_id
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Number of seats nobody holds.
    pub fn free_seat_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_free()).count()
    }
}
