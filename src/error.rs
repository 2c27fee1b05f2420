/*!
Client errors.
*/
use serde::Deserialize;
use std::{error, fmt};

/// Error body returned by TMF APIs.
///
/// See TMF630 REST API Design Guidelines, part 1, "Error representation".
#[derive(Deserialize, Debug)]
pub struct ApiError {
    /// Application-specific error code.
    pub code: String,

    /// Short explanation of the reason for the error.
    pub reason: String,

    /// Longer human-readable description.
    #[serde(default)]
    pub message: Option<String>,

    /// HTTP status code, echoed by some servers.
    #[serde(default)]
    pub status: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}: {}", self.code, self.reason)?;
        if let Some(ref message) = self.message {
            write!(f, " ({})", message)?;
        }
        Ok(())
    }
}

impl error::Error for ApiError {}

/// Any failure of an API operation. Transport, decoding and backend errors
/// all surface here; callers present them uniformly and never retry.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// URL parse error.
    #[error("{0}")]
    Url(#[from] url::ParseError),

    /// JSON error.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Error reported by the backend.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// The configured base URL cannot carry path segments.
    #[error("Url: Path segments is cannot-be-a-base")]
    CannotBeABase,
}
