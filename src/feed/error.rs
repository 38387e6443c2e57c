//! Fetch error types

use crate::feed::types::Endpoint;
use std::time::Duration;
use thiserror::Error;

/// Result type for feed operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Failure of a feed fetch. Any one failing request fails the whole batch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network error on {endpoint}: {message}")]
    Network { endpoint: Endpoint, message: String },

    #[error("{endpoint} returned status {status}")]
    Status { endpoint: Endpoint, status: u16 },

    #[error("Malformed payload from {endpoint}: {message}")]
    Decode { endpoint: Endpoint, message: String },

    #[error("{endpoint} timed out after {timeout:?}")]
    Timeout { endpoint: Endpoint, timeout: Duration },

    #[error("Invalid API base URL: {message}")]
    InvalidUrl { message: String },
}

impl FetchError {
    /// Create a network error
    pub fn network(endpoint: Endpoint, message: impl Into<String>) -> Self {
        FetchError::Network {
            endpoint,
            message: message.into(),
        }
    }

    /// Create a status error
    pub fn status(endpoint: Endpoint, status: u16) -> Self {
        FetchError::Status { endpoint, status }
    }

    /// Create a decode error
    pub fn decode(endpoint: Endpoint, message: impl Into<String>) -> Self {
        FetchError::Decode {
            endpoint,
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout(endpoint: Endpoint, timeout: Duration) -> Self {
        FetchError::Timeout { endpoint, timeout }
    }

    /// Create an invalid base URL error
    pub fn invalid_url(message: impl Into<String>) -> Self {
        FetchError::InvalidUrl {
            message: message.into(),
        }
    }

    /// Endpoint that triggered the failure
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            FetchError::Network { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Decode { endpoint, .. }
            | FetchError::Timeout { endpoint, .. } => Some(*endpoint),
            FetchError::InvalidUrl { .. } => None,
        }
    }

    /// Whether re-issuing the batch could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network { .. } | FetchError::Timeout { .. } => true,
            FetchError::Status { status, .. } => *status == 429 || *status >= 500,
            FetchError::Decode { .. } | FetchError::InvalidUrl { .. } => false,
        }
    }
}
