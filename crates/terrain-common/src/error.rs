//! Error types for the contouring services.

use thiserror::Error;

/// Result type alias using ContourError.
pub type ContourResult<T> = Result<T, ContourError>;

/// Failures of the remote elevation data source.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network or transport level failure.
    #[error("Error while requesting the elevation data.")]
    Request(String),

    /// The provider answered with a status other than "OK".
    #[error("{0}")]
    Status(String),

    /// The response body could not be decoded.
    #[error("Malformed elevation response: {0}")]
    Malformed(String),

    /// The provider returned a different number of samples than requested.
    #[error("Elevation provider returned {actual} samples for {expected} locations")]
    CountMismatch { expected: usize, actual: usize },
}

/// Primary error type for a contour request.
#[derive(Debug, Error)]
pub enum ContourError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    #[error("No elevation sample lies inside the boundary")]
    NoInteriorSamples,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContourError {
    /// Create an InvalidBoundary error.
    pub fn invalid_boundary(msg: impl Into<String>) -> Self {
        Self::InvalidBoundary(msg.into())
    }

    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ContourError::Provider(_) => "provider",
            ContourError::InvalidBoundary(_) | ContourError::NoInteriorSamples => "geometry",
            ContourError::Internal(_) => "internal",
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Malformed(err.to_string())
    }
}
