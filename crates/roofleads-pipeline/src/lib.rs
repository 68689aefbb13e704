//! Prompt-to-leads pipeline.
//!
//! Extracts a place name from a prompt, geocodes it, searches nearby places,
//! scores each one with a fixed heuristic, and returns them ranked. Every
//! terminal state of a run is a [`PipelineOutcome`] variant.

pub mod outcome;
pub mod pipeline;
pub mod scorer;
pub mod services;

pub use outcome::{PipelineOutcome, PipelineStage};
pub use pipeline::LeadPipeline;
pub use scorer::{lead_score, score_places};
pub use services::{Geocoder, LocationExtractor, PlaceFinder};
