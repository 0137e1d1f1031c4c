//! Coach partitioning and candidate seat selection.
//!
//! A candidate is the set of seats one reservation attempt will ask for.
//! Every candidate lies within a single coach; a party is never split.

use std::collections::HashMap;

use crate::domain::{Seat, SeatId, compare_seat_numbers};

use super::occupancy::OccupancyPolicy;

/// The seats of one coach, in seat-number order.
#[derive(Debug, Clone)]
pub struct Coach<'a> {
    id: &'a str,
    seats: Vec<&'a Seat>,
}

impl<'a> Coach<'a> {
    pub fn id(&self) -> &'a str {
        self.id
    }

    pub fn seats(&self) -> &[&'a Seat] {
        &self.seats
    }

    /// The first `count` free seats, or `None` if the coach has fewer.
    pub fn first_free_seats(&self, count: usize) -> Option<Vec<SeatId>> {
        let chosen: Vec<SeatId> = self
            .seats
            .iter()
            .filter(|seat| seat.is_free())
            .take(count)
            .map(|seat| seat.id().clone())
            .collect();

        (chosen.len() == count).then_some(chosen)
    }
}

/// Group seats by coach.
///
/// Coaches appear in the order their first seat appears in `seats`. Within a
/// coach, seats are sorted by [`compare_seat_numbers`]; the sort is stable.
pub fn partition_by_coach(seats: &[Seat]) -> Vec<Coach<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut coaches: Vec<Coach<'_>> = Vec::new();

    for seat in seats {
        let slot = *index.entry(seat.coach()).or_insert_with(|| {
            coaches.push(Coach {
                id: seat.coach(),
                seats: Vec::new(),
            });
            coaches.len() - 1
        });
        coaches[slot].seats.push(seat);
    }

    for coach in &mut coaches {
        coach
            .seats
            .sort_by(|a, b| compare_seat_numbers(a.id().number(), b.id().number()));
    }

    coaches
}

/// Candidate seat sets for a party of `count`, in coach order.
///
/// Coaches the policy rejects are skipped, as are coaches with fewer than
/// `count` free seats. Train-level occupancy is not checked here.
pub fn candidate_seat_sets(
    seats: &[Seat],
    count: u32,
    policy: &OccupancyPolicy,
) -> Vec<Vec<SeatId>> {
    let Ok(wanted) = usize::try_from(count) else {
        return Vec::new();
    };

    partition_by_coach(seats)
        .into_iter()
        .filter(|coach| !policy.is_over_occupied(coach.seats.iter().copied(), count))
        .filter_map(|coach| coach.first_free_seats(wanted))
        .collect()
}
