//! Shared data model and configuration for the roof-lead finder.

pub mod app_config;
pub mod config;
pub mod places;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use places::{Coordinate, PlaceRecord, ResultTable, ScoredPlaceRecord, PLACEHOLDER_NAME};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
