//! In-memory train data, booking commits and booking references.
//!
//! These are the collaborators the reservation core talks to when running
//! as a server. Nothing here is persisted.

mod error;
mod reference;
mod trains;
mod types;

pub use error::StoreError;
pub use reference::{BookingReferenceGenerator, DEFAULT_REFERENCE_SEED};
pub use trains::TrainStore;
pub use types::{SeatDto, TrainDto, TrainsDto};
