//! Application state for the web layer.

use std::sync::Arc;

use crate::allocator::OccupancyPolicy;
use crate::store::{BookingReferenceGenerator, TrainStore};

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Train data and bookings
    pub store: Arc<TrainStore>,

    /// Source of booking references for requests that bring none
    pub references: Arc<BookingReferenceGenerator>,

    /// Occupancy rule for new reservations
    pub policy: Arc<OccupancyPolicy>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        store: TrainStore,
        references: BookingReferenceGenerator,
        policy: OccupancyPolicy,
    ) -> Self {
        Self {
            store: Arc::new(store),
            references: Arc::new(references),
            policy: Arc::new(policy),
        }
    }
}
