//! Client for the mapping service: geocoding and nearby-place search.

pub mod client;
pub mod error;
pub mod types;

pub use client::{MapsClient, DEFAULT_BASE_URL};
pub use error::MapsError;
