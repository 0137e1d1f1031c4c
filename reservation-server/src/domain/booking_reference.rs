//! Booking reference type.

use std::fmt;

/// A caller-supplied reference identifying one reservation.
///
/// The empty reference is meaningful: on a [`ReservationResult`] it marks a
/// failed reservation, and on a [`Seat`] it means the seat is free. Use
/// [`BookingReference::none`] to construct it explicitly.
///
/// [`ReservationResult`]: super::ReservationResult
/// [`Seat`]: super::Seat
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BookingReference(String);

impl BookingReference {
    /// Wrap a reference string. Empty strings are allowed and mean "none".
    pub fn new(reference: impl Into<String>) -> Self {
        BookingReference(reference.into())
    }

    /// The empty reference.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if this is the empty reference.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the reference and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookingReference({})", self.0)
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
