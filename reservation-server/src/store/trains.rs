//! In-memory train data and booking store.
//!
//! Serves as both the train provider (topology snapshots) and the booking
//! service (atomic seat commits) for the running server. Data lives for the
//! lifetime of the process only.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use tracing::debug;

use crate::allocator::{BookingError, BookingService, ProviderError, TrainProvider};
use crate::domain::{ReservationRequest, ReservationResult, Seat, TrainId, TrainTopology};

use super::error::StoreError;
use super::types::{TrainDto, TrainsDto};

/// Thread-safe store of train seat layouts and their bookings.
#[derive(Debug, Default)]
pub struct TrainStore {
    /// Seats per train, kept in canonical seat order.
    trains: RwLock<HashMap<TrainId, Vec<Seat>>>,
}

impl TrainStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from parsed seed data.
    pub fn from_dto(trains: &TrainsDto) -> Result<Self, StoreError> {
        let store = Self::new();
        for (id, train) in trains {
            let train_id = TrainId::new(id.as_str()).map_err(|e| StoreError::InvalidTrain {
                train: id.clone(),
                message: e.to_string(),
            })?;
            store.insert_train(train_id, train.to_seats(id)?)?;
        }
        Ok(store)
    }

    /// Build a store from a JSON seed document.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let trains: TrainsDto = serde_json::from_str(json)?;
        Self::from_dto(&trains)
    }

    /// Load a store from a JSON seed file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Add or replace a train.
    ///
    /// Seats are sorted into canonical order; duplicate seat ids are rejected.
    pub fn insert_train(&self, train_id: TrainId, mut seats: Vec<Seat>) -> Result<(), StoreError> {
        seats.sort_by(|a, b| a.id().cmp(b.id()));
        if let Some(pair) = seats.windows(2).find(|pair| pair[0].id() == pair[1].id()) {
            return Err(StoreError::InvalidTrain {
                train: train_id.to_string(),
                message: format!("duplicate seat {}", pair[0].id()),
            });
        }

        let mut trains = self.trains.write().map_err(|_| StoreError::Poisoned)?;
        trains.insert(train_id, seats);
        Ok(())
    }

    /// Ids of all trains, sorted.
    pub fn train_ids(&self) -> Result<Vec<TrainId>, StoreError> {
        let trains = self.trains.read().map_err(|_| StoreError::Poisoned)?;
        let mut ids: Vec<TrainId> = trains.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    /// Current seats of one train in serialized form.
    pub fn train_data(&self, train_id: &TrainId) -> Result<TrainDto, StoreError> {
        let trains = self.trains.read().map_err(|_| StoreError::Poisoned)?;
        let seats = trains
            .get(train_id)
            .ok_or_else(|| StoreError::TrainNotFound(train_id.clone()))?;
        Ok(TrainDto::from_seats(seats))
    }

    /// Clear every booking on one train.
    pub fn reset(&self, train_id: &TrainId) -> Result<(), StoreError> {
        let mut trains = self.trains.write().map_err(|_| StoreError::Poisoned)?;
        let seats = trains
            .get_mut(train_id)
            .ok_or_else(|| StoreError::TrainNotFound(train_id.clone()))?;

        for seat in seats.iter_mut() {
            *seat = Seat::free(seat.id().clone());
        }

        debug!(train = %train_id, "Bookings reset");
        Ok(())
    }
}

impl TrainProvider for TrainStore {
    fn topology(&self, train_id: &TrainId) -> Result<TrainTopology, ProviderError> {
        let trains = self
            .trains
            .read()
            .map_err(|_| ProviderError::Unavailable(StoreError::Poisoned.to_string()))?;

        let seats = trains
            .get(train_id)
            .cloned()
            .ok_or_else(|| ProviderError::TrainNotFound(train_id.clone()))?;

        TrainTopology::new(train_id.clone(), seats)
            .map_err(|e| ProviderError::Unavailable(e.to_string()))
    }
}

impl BookingService for TrainStore {
    /// Assign every requested seat to the booking, or none of them.
    ///
    /// Seats already held by the same booking reference count as free, so
    /// repeating a successful request succeeds again.
    fn reserve(&self, request: &ReservationRequest) -> Result<ReservationResult, BookingError> {
        if request.booking_reference.is_empty() {
            return Err(BookingError::InvalidRequest(
                "booking reference cannot be empty".to_string(),
            ));
        }
        if request.seats.is_empty() {
            return Err(BookingError::InvalidRequest("no seats requested".to_string()));
        }

        let mut trains = self
            .trains
            .write()
            .map_err(|_| BookingError::Unavailable(StoreError::Poisoned.to_string()))?;

        let seats = trains
            .get_mut(&request.train_id)
            .ok_or_else(|| BookingError::UnknownTrain(request.train_id.clone()))?;

        let mut indices = Vec::with_capacity(request.seats.len());
        for wanted in &request.seats {
            let idx = seats
                .binary_search_by(|seat| seat.id().cmp(wanted))
                .map_err(|_| BookingError::UnknownSeat {
                    train_id: request.train_id.clone(),
                    seat: wanted.to_string(),
                })?;
            indices.push(idx);
        }

        let conflict = indices.iter().any(|&idx| {
            seats[idx]
                .booking_reference()
                .is_some_and(|held| held != &request.booking_reference)
        });
        if conflict {
            debug!(
                train = %request.train_id,
                booking_reference = %request.booking_reference,
                "Seats already taken, declining"
            );
            return Ok(ReservationResult::failed(request.train_id.clone()));
        }

        for idx in indices {
            seats[idx] = seats[idx].with_booking(request.booking_reference.clone());
        }

        Ok(ReservationResult::reserved(
            request.train_id.clone(),
            request.booking_reference.clone(),
            request.seats.iter().cloned(),
        ))
    }
}
