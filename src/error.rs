//! Error types for the menu client.
//!
//! Transport failures surface to the caller; schema drift inside a payload
//! never lands here (the extractor degrades to diagnostics plus a partial
//! result). There is no internal retry; callers needing resilience
//! re-invoke the fetch, using [`MenuError::is_retryable`] to decide.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    /// A required identifier was missing from the config. Raised at
    /// construction, never recovered.
    #[error("missing required config value: {0}")]
    MissingConfig(&'static str),

    /// The API reported a server-side (5xx) failure.
    #[error("the menu API is unavailable (HTTP {status}): {message}")]
    UpstreamUnavailable { status: u16, message: String },

    /// The API rejected the request (4xx). Usually wrong identifiers.
    #[error(
        "the menu API rejected the request (HTTP {status}): {message}. \
         Double-check your buildingId and districtId config values"
    )]
    UpstreamRejected { status: u16, message: String },

    /// A status outside the 4xx/5xx taxonomy that still wasn't success.
    #[error("unexpected HTTP status {0} from the menu API")]
    UnexpectedStatus(u16),

    #[error("HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl MenuError {
    /// Whether re-invoking the fetch could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            MenuError::UpstreamUnavailable { .. } => true,
            MenuError::Http(err) => err.is_timeout() || err.is_connect(),
            _ => false,
        }
    }
}
