//! Pipeline orchestration.

use roofleads_core::config::DEFAULT_SEARCH_RADIUS_METERS;

use crate::outcome::{PipelineOutcome, PipelineStage};
use crate::scorer::score_places;
use crate::services::{Geocoder, LocationExtractor, PlaceFinder};

/// Runs prompts through extraction, geocoding, nearby search, and scoring.
///
/// Holds no per-run state: one instance can serve any number of prompts,
/// and each run is independent of the others.
pub struct LeadPipeline<E, G, P> {
    extractor: E,
    geocoder: G,
    place_finder: P,
    radius_meters: u32,
}

impl<E, G, P> LeadPipeline<E, G, P>
where
    E: LocationExtractor,
    G: Geocoder,
    P: PlaceFinder,
{
    /// Builds a pipeline that searches the default 800 m radius.
    pub fn new(extractor: E, geocoder: G, place_finder: P) -> Self {
        Self::with_radius(
            extractor,
            geocoder,
            place_finder,
            DEFAULT_SEARCH_RADIUS_METERS,
        )
    }

    pub fn with_radius(extractor: E, geocoder: G, place_finder: P, radius_meters: u32) -> Self {
        Self {
            extractor,
            geocoder,
            place_finder,
            radius_meters,
        }
    }

    #[must_use]
    pub fn radius_meters(&self) -> u32 {
        self.radius_meters
    }

    /// Run the full pipeline for one prompt.
    ///
    /// 1. Extract a place name from the prompt.
    /// 2. Geocode it. No result ends the run with `LocationNotFound`.
    /// 3. Search nearby places. An empty list ends the run with `NoLeadsFound`.
    /// 4. Score each place and rank the table highest first.
    ///
    /// Steps run strictly in sequence and a later step is never started once
    /// an earlier one has ended the run. Service failures are returned as
    /// outcome variants carrying the error text; this method never fails.
    pub async fn run(&self, prompt: &str) -> PipelineOutcome {
        tracing::info!(stage = %PipelineStage::ExtractLocation, "pipeline started");
        let location = match self.extractor.extract(prompt).await {
            Ok(location) => location,
            Err(e) => {
                tracing::warn!(stage = %PipelineStage::ExtractLocation, error = %e, "location extraction failed");
                return PipelineOutcome::ExtractionFailed {
                    message: e.to_string(),
                };
            }
        };
        // Extractors are expected to trim, but an all-whitespace reply must
        // still never reach the geocoder.
        let location = location.trim().to_string();
        if location.is_empty() {
            tracing::warn!(stage = %PipelineStage::ExtractLocation, "extractor returned an empty location");
            return PipelineOutcome::ExtractionFailed {
                message: "no location could be extracted from the prompt".to_string(),
            };
        }

        tracing::info!(stage = %PipelineStage::Geocode, %location, "geocoding extracted location");
        let coordinate = match self.geocoder.geocode(&location).await {
            Ok(Some(coordinate)) => coordinate,
            Ok(None) => {
                tracing::info!(%location, "location not found");
                return PipelineOutcome::LocationNotFound { location };
            }
            Err(e) => {
                tracing::warn!(stage = %PipelineStage::Geocode, %location, error = %e, "geocoding failed");
                return PipelineOutcome::ExternalServiceError {
                    stage: PipelineStage::Geocode,
                    location,
                    message: e.to_string(),
                };
            }
        };

        tracing::info!(
            stage = %PipelineStage::FindPlaces,
            %location,
            %coordinate,
            radius_meters = self.radius_meters,
            "searching nearby places"
        );
        let places = match self
            .place_finder
            .find_nearby(coordinate, self.radius_meters)
            .await
        {
            Ok(places) => places,
            Err(e) => {
                tracing::warn!(stage = %PipelineStage::FindPlaces, %location, error = %e, "nearby search failed");
                return PipelineOutcome::ExternalServiceError {
                    stage: PipelineStage::FindPlaces,
                    location,
                    message: e.to_string(),
                };
            }
        };

        if places.is_empty() {
            tracing::info!(%location, %coordinate, "no leads found nearby");
            return PipelineOutcome::NoLeadsFound {
                location,
                coordinate,
            };
        }

        tracing::info!(stage = %PipelineStage::ScoreAndSort, count = places.len(), "scoring places");
        let table = score_places(places);

        tracing::info!(%location, leads = table.len(), "pipeline complete");
        PipelineOutcome::Success {
            location,
            coordinate,
            table,
        }
    }
}
