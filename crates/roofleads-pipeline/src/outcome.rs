use roofleads_core::{Coordinate, ResultTable};
use serde::Serialize;

/// The four steps of a run, in the order they execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    ExtractLocation,
    Geocode,
    FindPlaces,
    ScoreAndSort,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineStage::ExtractLocation => write!(f, "extract_location"),
            PipelineStage::Geocode => write!(f, "geocode"),
            PipelineStage::FindPlaces => write!(f, "find_places"),
            PipelineStage::ScoreAndSort => write!(f, "score_and_sort"),
        }
    }
}

/// Terminal state of one pipeline run.
///
/// Empty results (`LocationNotFound`, `NoLeadsFound`) are expected outcomes
/// and are kept apart from service failures. Every variant after extraction
/// carries the extracted location so callers can echo it back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PipelineOutcome {
    Success {
        location: String,
        coordinate: Coordinate,
        table: ResultTable,
    },
    /// The language-model call failed or produced no usable text.
    ExtractionFailed { message: String },
    /// The geocoder had no result for the extracted location.
    LocationNotFound { location: String },
    /// The nearby search came back empty.
    NoLeadsFound {
        location: String,
        coordinate: Coordinate,
    },
    /// The geocoder or place finder failed outright.
    ExternalServiceError {
        stage: PipelineStage,
        location: String,
        message: String,
    },
}

impl PipelineOutcome {
    /// The extracted location, if extraction got that far.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            PipelineOutcome::Success { location, .. }
            | PipelineOutcome::LocationNotFound { location }
            | PipelineOutcome::NoLeadsFound { location, .. }
            | PipelineOutcome::ExternalServiceError { location, .. } => Some(location),
            PipelineOutcome::ExtractionFailed { .. } => None,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, PipelineOutcome::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_is_absent_only_for_extraction_failure() {
        let failed = PipelineOutcome::ExtractionFailed {
            message: "boom".to_string(),
        };
        assert_eq!(failed.location(), None);

        let not_found = PipelineOutcome::LocationNotFound {
            location: "Atlantis".to_string(),
        };
        assert_eq!(not_found.location(), Some("Atlantis"));
        assert!(!not_found.is_success());
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let outcome = PipelineOutcome::ExternalServiceError {
            stage: PipelineStage::FindPlaces,
            location: "Toronto".to_string(),
            message: "unexpected HTTP status 403".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({
                "outcome": "external_service_error",
                "stage": "find_places",
                "location": "Toronto",
                "message": "unexpected HTTP status 403"
            })
        );
    }

    #[test]
    fn stage_display_is_snake_case() {
        assert_eq!(PipelineStage::ExtractLocation.to_string(), "extract_location");
        assert_eq!(PipelineStage::FindPlaces.to_string(), "find_places");
    }
}
