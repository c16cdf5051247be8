/// Error types for loading the state dataset
use thiserror::Error;

/// Any transport or decode failure of the dataset request.
///
/// There is no retry: the first failure aborts the chart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchFailure {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body was not a valid states payload
    #[error("failed to decode states payload: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchFailure {
    fn from(err: serde_json::Error) -> Self {
        FetchFailure::Decode(err.to_string())
    }
}

/// Type alias for Results using FetchFailure
pub type Result<T> = std::result::Result<T, FetchFailure>;
