//! Mapping-service response types.
//!
//! Both endpoints wrap their payload in `{"status": "...", "results": [...]}`.
//! Only the fields the lead finder reads are modelled; unknown fields are
//! ignored. A result that lacks `geometry.location` fails deserialization so
//! shape drift is caught at this boundary.

use serde::Deserialize;

/// `lat`/`lng` pair as it appears under `geometry.location`.
#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

// ---------------------------------------------------------------------------
// geocode/json
// ---------------------------------------------------------------------------

/// Response from `GET geocode/json`.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    /// `"OK"`, `"ZERO_RESULTS"`, `"REQUEST_DENIED"`, and so on.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

// ---------------------------------------------------------------------------
// place/nearbysearch/json
// ---------------------------------------------------------------------------

/// Response from `GET place/nearbysearch/json`.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<NearbyPlace>>,
    /// Present when more pages exist. Never followed.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A single nearby point of interest.
#[derive(Debug, Deserialize)]
pub struct NearbyPlace {
    #[serde(default)]
    pub name: Option<String>,
    pub geometry: Geometry,
}
