use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 800;
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing is decoupled from the real environment so tests can drive it with
/// a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_positive_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        match raw.parse::<u64>() {
            Ok(0) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            }),
            Ok(v) => Ok(v),
            Err(e) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    let parse_positive_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        match raw.parse::<u32>() {
            Ok(0) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            }),
            Ok(v) => Ok(v),
            Err(e) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    let google_api_key = require("GOOGLE_API_KEY")?;
    let openai_api_key = require("OPENAI_API_KEY")?;

    let log_level = or_default("ROOFLEADS_LOG_LEVEL", "info");
    let request_timeout_secs = parse_positive_u64("ROOFLEADS_REQUEST_TIMEOUT_SECS", "10")?;
    let search_radius_meters = parse_positive_u32(
        "ROOFLEADS_SEARCH_RADIUS_METERS",
        &DEFAULT_SEARCH_RADIUS_METERS.to_string(),
    )?;
    let openai_model = or_default("ROOFLEADS_OPENAI_MODEL", DEFAULT_OPENAI_MODEL);
    let maps_base_url = or_default("ROOFLEADS_MAPS_BASE_URL", DEFAULT_MAPS_BASE_URL);
    let openai_base_url = or_default("ROOFLEADS_OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL);
    let user_agent = or_default("ROOFLEADS_USER_AGENT", "roofleads/0.1 (lead-finder)");

    Ok(AppConfig {
        google_api_key,
        openai_api_key,
        log_level,
        request_timeout_secs,
        search_radius_meters,
        openai_model,
        maps_base_url,
        openai_base_url,
        user_agent,
    })
}
