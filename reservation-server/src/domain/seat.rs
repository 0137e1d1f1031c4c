//! Seat identity and seat state.

use std::cmp::Ordering;
use std::fmt;

use super::BookingReference;

/// Error returned when parsing an invalid seat code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid seat code {code:?}: {reason}")]
pub struct InvalidSeatId {
    code: String,
    reason: &'static str,
}

/// Compare two seat numbers in canonical seat order.
///
/// Numbers that both parse as unsigned integers compare numerically, so seat
/// `"2"` comes before seat `"10"`. Numeric numbers sort before non-numeric
/// ones, and two non-numeric numbers compare lexically. Numerically equal
/// spellings (`"01"` and `"1"`) are split lexically to keep the order total.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use reservation_server::domain::compare_seat_numbers;
///
/// assert_eq!(compare_seat_numbers("2", "10"), Ordering::Less);
/// assert_eq!(compare_seat_numbers("10", "10"), Ordering::Equal);
/// assert_eq!(compare_seat_numbers("99", "X"), Ordering::Less);
/// ```
pub fn compare_seat_numbers(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// A seat identifier: a coach plus a seat number within that coach.
///
/// Seat codes are written number-then-coach, with the coach being the final
/// character: `"12A"` is seat `12` in coach `A`.
///
/// `SeatId` orders by coach, then by seat number using
/// [`compare_seat_numbers`].
///
/// # Examples
///
/// ```
/// use reservation_server::domain::SeatId;
///
/// let seat = SeatId::parse("12A").unwrap();
/// assert_eq!(seat.number(), "12");
/// assert_eq!(seat.coach(), "A");
/// assert_eq!(seat.to_string(), "12A");
///
/// assert!(SeatId::parse("A").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SeatId {
    coach: String,
    number: String,
}

impl SeatId {
    /// Parse a raw seat code.
    ///
    /// The code must have at least two characters: one or more for the seat
    /// number followed by exactly one for the coach.
    pub fn parse(code: &str) -> Result<Self, InvalidSeatId> {
        let Some((coach_start, _)) = code.char_indices().last() else {
            return Err(InvalidSeatId {
                code: code.to_string(),
                reason: "seat code cannot be empty",
            });
        };

        if coach_start == 0 {
            return Err(InvalidSeatId {
                code: code.to_string(),
                reason: "must have a seat number followed by a coach",
            });
        }

        Ok(SeatId {
            coach: code[coach_start..].to_string(),
            number: code[..coach_start].to_string(),
        })
    }

    /// The coach this seat belongs to.
    pub fn coach(&self) -> &str {
        &self.coach
    }

    /// The seat number within the coach.
    pub fn number(&self) -> &str {
        &self.number
    }
}

impl Ord for SeatId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coach
            .cmp(&other.coach)
            .then_with(|| compare_seat_numbers(&self.number, &other.number))
    }
}

impl PartialOrd for SeatId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeatId({}{})", self.number, self.coach)
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.coach)
    }
}

/// A seat as seen in one topology snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    id: SeatId,
    /// `None` when the seat is free. Never holds an empty reference.
    booking_reference: Option<BookingReference>,
}

impl Seat {
    /// Create a seat, treating an empty booking reference as free.
    pub fn new(id: SeatId, booking_reference: Option<BookingReference>) -> Self {
        Self {
            id,
            booking_reference: booking_reference.filter(|r| !r.is_empty()),
        }
    }

    /// A free seat.
    pub fn free(id: SeatId) -> Self {
        Self::new(id, None)
    }

    /// A seat held by `reference`.
    pub fn booked(id: SeatId, reference: BookingReference) -> Self {
        Self::new(id, Some(reference))
    }

    pub fn id(&self) -> &SeatId {
        &self.id
    }

    pub fn coach(&self) -> &str {
        self.id.coach()
    }

    pub fn booking_reference(&self) -> Option<&BookingReference> {
        self.booking_reference.as_ref()
    }

    /// Returns true if nobody holds this seat.
    pub fn is_free(&self) -> bool {
        self.booking_reference.is_none()
    }

    /// A copy of this seat held by `reference`.
    pub fn with_booking(&self, reference: BookingReference) -> Self {
        Self::new(self.id.clone(), Some(reference))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Parsing splits off exactly the last character as the coach
        #[test]
        fn parse_roundtrip(number in "[0-9]{1,4}", coach in "[A-Z]") {
            let code = format!("{}{}", number, coach);
            let seat = SeatId::parse(&code).unwrap();
            prop_assert_eq!(seat.number(), number.as_str());
            prop_assert_eq!(seat.coach(), coach.as_str());
            prop_assert_eq!(seat.to_string(), code);
        }

        /// Integer seat numbers order the same way as the integers
        #[test]
        fn numeric_order_matches_integers(a in 0u32..10_000, b in 0u32..10_000) {
            prop_assert_eq!(
                compare_seat_numbers(&a.to_string(), &b.to_string()),
                a.cmp(&b)
            );
        }

        /// The comparison is antisymmetric and only equal for equal strings
        #[test]
        fn comparison_is_total(a in "[0-9A-C]{1,3}", b in "[0-9A-C]{1,3}") {
            let ab = compare_seat_numbers(&a, &b);
            let ba = compare_seat_numbers(&b, &a);
            prop_assert_eq!(ab, ba.reverse());
            prop_assert_eq!(ab == Ordering::Equal, a == b);
        }
    }
}
