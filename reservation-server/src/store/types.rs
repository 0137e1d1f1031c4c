//! Serialized train data.
//!
//! The seed file and the `/data_for_train` endpoint share one JSON shape:
//!
//! ```json
//! {
//!   "express_2000": {
//!     "seats": {
//!       "1A": { "seat_number": "1", "coach": "A", "booking_reference": "" },
//!       "2A": { "seat_number": "2", "coach": "A", "booking_reference": "75bcd15" }
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{BookingReference, Seat, SeatId};

use super::error::StoreError;

/// One seat as serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatDto {
    pub seat_number: String,
    pub coach: String,
    /// Empty when the seat is free.
    #[serde(default)]
    pub booking_reference: String,
}

/// One train as serialized: seat code → seat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainDto {
    pub seats: BTreeMap<String, SeatDto>,
}

/// A whole seed file: train id → train.
pub type TrainsDto = BTreeMap<String, TrainDto>;

impl TrainDto {
    /// Serialize seats from a topology snapshot.
    pub fn from_seats(seats: &[Seat]) -> Self {
        let seats = seats
            .iter()
            .map(|seat| {
                let dto = SeatDto {
                    seat_number: seat.id().number().to_string(),
                    coach: seat.coach().to_string(),
                    booking_reference: seat
                        .booking_reference()
                        .map(|r| r.as_str().to_string())
                        .unwrap_or_default(),
                };
                (seat.id().to_string(), dto)
            })
            .collect();
        Self { seats }
    }

    /// Validate and convert to seats.
    ///
    /// Each key must be a valid seat code that agrees with the entry's
    /// `seat_number` and `coach` fields.
    pub fn to_seats(&self, train: &str) -> Result<Vec<Seat>, StoreError> {
        let invalid = |message: String| StoreError::InvalidTrain {
            train: train.to_string(),
            message,
        };

        self.seats
            .iter()
            .map(|(code, dto)| {
                let id = SeatId::parse(code).map_err(|e| invalid(e.to_string()))?;
                if id.number() != dto.seat_number || id.coach() != dto.coach {
                    return Err(invalid(format!(
                        "seat {code} has seat_number {:?} and coach {:?}",
                        dto.seat_number, dto.coach
                    )));
                }
                let reference = BookingReference::new(dto.booking_reference.clone());
                Ok(Seat::new(id, Some(reference)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(number: &str, coach: &str, reference: &str) -> SeatDto {
        SeatDto {
            seat_number: number.to_string(),
            coach: coach.to_string(),
            booking_reference: reference.to_string(),
        }
    }

    #[test]
    fn parses_seed_json() {
        let json = r#"{
            "express_2000": {
                "seats": {
                    "1A": { "seat_number": "1", "coach": "A", "booking_reference": "" },
                    "2A": { "seat_number": "2", "coach": "A", "booking_reference": "abc" },
                    "1B": { "seat_number": "1", "coach": "B" }
                }
            }
        }"#;

        let trains: TrainsDto = serde_json::from_str(json).unwrap();
        let seats = trains["express_2000"].to_seats("express_2000").unwrap();

        assert_eq!(seats.len(), 3);
        assert_eq!(seats.iter().filter(|s| s.is_free()).count(), 2);
    }

    #[test]
    fn rejects_mismatched_fields() {
        let mut train = TrainDto::default();
        train.seats.insert("1A".into(), dto("2", "A", ""));

        let err = train.to_seats("t").unwrap_err();
        assert!(err.to_string().contains("seat 1A has seat_number \"2\""));
    }

    #[test]
    fn rejects_invalid_codes() {
        let mut train = TrainDto::default();
        train.seats.insert("A".into(), dto("", "A", ""));

        assert!(matches!(
            train.to_seats("t"),
            Err(StoreError::InvalidTrain { .. })
        ));
    }

    #[test]
    fn from_seats_preserves_bookings() {
        let seats = vec![
            Seat::free(SeatId::parse("1A").unwrap()),
            Seat::booked(SeatId::parse("2A").unwrap(), BookingReference::new("abc")),
        ];

        let train = TrainDto::from_seats(&seats);

        assert_eq!(train.seats["1A"], dto("1", "A", ""));
        assert_eq!(train.seats["2A"], dto("2", "A", "abc"));
        assert_eq!(train.to_seats("t").unwrap().len(), 2);
    }
}
