//! Occupancy policy: when is a train or coach too full for another booking?

use crate::domain::Seat;

/// Default occupancy ceiling, as a percentage of seats.
///
/// A unit at or above this occupancy accepts no new reservations, i.e. at
/// least 30% of its seats must be free.
pub const DEFAULT_MAX_OCCUPANCY_PERCENT: u8 = 70;

/// Rule deciding whether a group of seats can take a new reservation.
///
/// The same rule is applied to a whole train and to each of its coaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyPolicy {
    /// Reject when occupancy (in whole percent, rounded down) reaches this.
    pub max_occupancy_percent: u8,

    /// Count the incoming party's seats as already occupied.
    ///
    /// Off by default: occupancy is measured before the booking.
    pub count_incoming_party: bool,
}

impl OccupancyPolicy {
    pub fn new(max_occupancy_percent: u8, count_incoming_party: bool) -> Self {
        Self {
            max_occupancy_percent,
            count_incoming_party,
        }
    }

    /// Returns true if `seats` is too full to take `additional_seats` more.
    ///
    /// An empty seat group is always over-occupied.
    pub fn is_over_occupied<'a>(
        &self,
        seats: impl IntoIterator<Item = &'a Seat>,
        additional_seats: u32,
    ) -> bool {
        let (total, free) = seats.into_iter().fold((0u64, 0u64), |(total, free), seat| {
            (total + 1, free + u64::from(seat.is_free()))
        });

        if total == 0 {
            return true;
        }

        let mut occupied = total - free;
        if self.count_incoming_party {
            occupied = (occupied + u64::from(additional_seats)).min(total);
        }

        let occupied_percent = occupied * 100 / total;
        occupied_percent >= u64::from(self.max_occupancy_percent)
    }
}

impl Default for OccupancyPolicy {
    fn default() -> Self {
        Self {
            max_occupancy_percent: DEFAULT_MAX_OCCUPANCY_PERCENT,
            count_incoming_party: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookingReference, SeatId};

    /// `booked` booked seats followed by `free` free seats, all in coach A.
    fn seats(booked: usize, free: usize) -> Vec<Seat> {
        (0..booked + free)
            .map(|i| {
                let id = SeatId::parse(&format!("{}A", i + 1)).unwrap();
                if i < booked {
                    Seat::booked(id, BookingReference::new("ref"))
                } else {
                    Seat::free(id)
                }
            })
            .collect()
    }

    #[test]
    fn default_policy() {
        let policy = OccupancyPolicy::default();
        assert_eq!(policy.max_occupancy_percent, 70);
        assert!(!policy.count_incoming_party);
    }

    #[test]
    fn empty_group_is_full() {
        let policy = OccupancyPolicy::default();
        assert!(policy.is_over_occupied(&Vec::<Seat>::new(), 0));
        assert!(policy.is_over_occupied(&Vec::<Seat>::new(), 3));
    }

    #[test]
    fn rejects_at_threshold() {
        let policy = OccupancyPolicy::default();
        // 7 of 10 booked: exactly 70%
        assert!(policy.is_over_occupied(&seats(7, 3), 1));
        // 8 of 10 booked
        assert!(policy.is_over_occupied(&seats(8, 2), 1));
    }

    #[test]
    fn accepts_below_threshold() {
        let policy = OccupancyPolicy::default();
        assert!(!policy.is_over_occupied(&seats(6, 4), 1));
        assert!(!policy.is_over_occupied(&seats(0, 10), 10));
        // 1 of 3 booked: 33%
        assert!(!policy.is_over_occupied(&seats(1, 2), 2));
    }

    #[test]
    fn percentage_rounds_down() {
        let policy = OccupancyPolicy::default();
        // 2 of 3 booked: 66.6% rounds down to 66
        assert!(!policy.is_over_occupied(&seats(2, 1), 1));
    }

    #[test]
    fn incoming_party_ignored_by_default() {
        let policy = OccupancyPolicy::default();
        assert!(!policy.is_over_occupied(&seats(0, 10), 9));
    }

    #[test]
    fn incoming_party_counted_when_enabled() {
        let policy = OccupancyPolicy::new(70, true);
        // 6 booked + 1 incoming = 70%
        assert!(policy.is_over_occupied(&seats(6, 4), 1));
        assert!(!policy.is_over_occupied(&seats(5, 5), 1));
        // More seats than exist still caps at 100%
        assert!(policy.is_over_occupied(&seats(0, 2), 50));
    }

    #[test]
    fn custom_threshold() {
        let policy = OccupancyPolicy::new(50, false);
        assert!(policy.is_over_occupied(&seats(5, 5), 1));
        assert!(!policy.is_over_occupied(&seats(4, 6), 1));
    }

    #[test]
    fn accepts_seat_references() {
        let policy = OccupancyPolicy::default();
        let all = seats(1, 9);
        let refs: Vec<&Seat> = all.iter().collect();
        assert!(!policy.is_over_occupied(refs, 1));
    }
}
