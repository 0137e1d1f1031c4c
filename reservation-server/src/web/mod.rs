//! Web layer for the reservation server.
//!
//! Provides HTTP endpoints for reserving seats and inspecting train data.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
