//! Train seat reservation server.
//!
//! Answers: "Which seats can this party have on this train?", seating the
//! whole party in one coach without pushing the train or coach past its
//! occupancy limit.

pub mod allocator;
pub mod config;
pub mod domain;
pub mod store;
pub mod web;
