use thiserror::Error;

/// Errors returned by the mapping-service client.
///
/// "Nothing found" is never an error here: an empty geocode is `Ok(None)` and
/// an empty nearby search is `Ok(vec![])`.
#[derive(Debug, Error)]
pub enum MapsError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The nearby-search endpoint answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    /// The response body did not match the expected JSON shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
