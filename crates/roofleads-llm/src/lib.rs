//! Chat-completion client that pulls a place name out of a free-text prompt.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ChatClient, DEFAULT_BASE_URL, DEFAULT_MODEL, EXTRACT_LOCATION_INSTRUCTION};
pub use error::LlmError;
