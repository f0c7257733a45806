/// Error types for RoadPulse API access
use thiserror::Error;

/// Main error type for RoadPulse API operations
#[derive(Error, Debug)]
pub enum RoadError {
    /// Request never produced a response (connect, DNS, fetch rejection)
    #[error("Request failed: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// Failed to parse the response body
    #[error("Failed to parse response: {0}")]
    ResponseParse(String),

    /// Base URL or default headers are unusable
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for RoadError {
    fn from(err: serde_json::Error) -> Self {
        RoadError::ResponseParse(err.to_string())
    }
}

/// Type alias for Results using RoadError
pub type Result<T> = std::result::Result<T, RoadError>;
