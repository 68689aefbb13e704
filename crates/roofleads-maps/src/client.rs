//! HTTP client for the mapping service's geocoding and nearby-search endpoints.
//!
//! Wraps `reqwest` with API key management and typed response deserialization.
//! Each public method issues exactly one request; nothing is retried, cached,
//! or paginated.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use roofleads_core::{AppConfig, Coordinate, PlaceRecord};

use crate::error::MapsError;
use crate::types::{GeocodeResponse, NearbySearchResponse};

pub const DEFAULT_BASE_URL: &str = roofleads_core::config::DEFAULT_MAPS_BASE_URL;

const GEOCODE_PATH: &str = "geocode/json";
const NEARBY_SEARCH_PATH: &str = "place/nearbysearch/json";

/// Client for the mapping service.
///
/// Use [`MapsClient::new`] for production or [`MapsClient::with_base_url`] to
/// point at a mock server in tests.
pub struct MapsClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl MapsClient {
    /// Creates a new client pointed at the production mapping service.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, MapsError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Builds a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`MapsClient::with_base_url`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, MapsError> {
        Self::with_base_url(
            &config.google_api_key,
            config.request_timeout_secs,
            &config.user_agent,
            &config.maps_base_url,
        )
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`MapsError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, MapsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so endpoint paths join beneath the base
        // rather than replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| MapsError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Resolves a place name to the coordinate of the first geocoding result.
    ///
    /// Returns `Ok(None)` when the service answers 200 with no results, or
    /// answers with any status other than 200. Neither case is an error.
    ///
    /// # Errors
    ///
    /// - [`MapsError::Http`] on network failure or timeout.
    /// - [`MapsError::Deserialize`] if a 200 body does not match the expected shape.
    pub async fn geocode(&self, place_name: &str) -> Result<Option<Coordinate>, MapsError> {
        let url = self.build_url(GEOCODE_PATH, &[("address", place_name)])?;
        tracing::debug!(place = place_name, "geocoding place name");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(
                place = place_name,
                status = status.as_u16(),
                "geocoder returned non-200 status; treating as not found"
            );
            return Ok(None);
        }

        let body = response.text().await?;
        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| MapsError::Deserialize {
                context: format!("geocode(address={place_name})"),
                source: e,
            })?;

        if let Some(api_status) = parsed.status.as_deref() {
            if api_status != "OK" && api_status != "ZERO_RESULTS" {
                tracing::warn!(
                    place = place_name,
                    api_status,
                    error_message = parsed.error_message.as_deref().unwrap_or(""),
                    "geocoder reported a non-OK status"
                );
            }
        }

        let coordinate = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|first| {
                let loc = first.geometry.location;
                Coordinate::new(loc.lat, loc.lng)
            });

        if coordinate.is_none() {
            tracing::info!(place = place_name, "geocoder returned no results");
        }
        Ok(coordinate)
    }

    /// Fetches points of interest within `radius_meters` of `coordinate`.
    ///
    /// Only the first page of results is consumed. Results keep the order
    /// the service returned them in. An absent or empty `results` list yields
    /// an empty `Vec`.
    ///
    /// # Errors
    ///
    /// - [`MapsError::Http`] on network failure or timeout.
    /// - [`MapsError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`MapsError::Deserialize`] if the body does not match the expected shape.
    pub async fn find_nearby(
        &self,
        coordinate: Coordinate,
        radius_meters: u32,
    ) -> Result<Vec<PlaceRecord>, MapsError> {
        let location = coordinate.to_string();
        let radius = radius_meters.to_string();
        let url = self.build_url(
            NEARBY_SEARCH_PATH,
            &[("location", location.as_str()), ("radius", radius.as_str())],
        )?;
        tracing::debug!(%location, radius_meters, "searching nearby places");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MapsError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: NEARBY_SEARCH_PATH.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: NearbySearchResponse =
            serde_json::from_str(&body).map_err(|e| MapsError::Deserialize {
                context: format!("nearbysearch(location={location}, radius={radius})"),
                source: e,
            })?;

        if parsed.next_page_token.is_some() {
            tracing::debug!(%location, "more nearby results available; only the first page is used");
        }
        if let Some(message) = parsed.error_message.as_deref() {
            tracing::warn!(
                %location,
                api_status = parsed.status.as_deref().unwrap_or(""),
                error_message = message,
                "nearby search reported an error message"
            );
        }

        let places: Vec<PlaceRecord> = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|p| PlaceRecord::new(p.name, p.geometry.location.lat, p.geometry.location.lng))
            .collect();

        tracing::debug!(%location, count = places.len(), "nearby search complete");
        Ok(places)
    }

    /// Builds the full request URL for `path` with percent-encoded query
    /// parameters. The API key is always appended last.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, MapsError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| MapsError::InvalidBaseUrl(format!("cannot join '{path}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
