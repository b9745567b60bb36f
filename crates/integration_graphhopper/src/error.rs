//! Routing error types and shared response helpers

use reqwest::{Response, header::RETRY_AFTER};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while computing a route
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Routing service rejected the request (message from the API, or HTTP status)
    #[error("API error: {0}")]
    ApiError(String),

    /// Failed to parse response from the routing service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Response contained no paths
    #[error("No route available between the given points")]
    NoRouteAvailable,

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl RoutingError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout { .. } | Self::RateLimitExceeded { .. }
        )
    }
}

/// Error body returned by the GraphHopper API on failure
#[derive(Debug, Deserialize)]
struct RawErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Extract the human-readable message from an error response body
pub(crate) fn api_message(body: &str) -> Option<String> {
    let raw: RawErrorBody = serde_json::from_str(body).ok()?;
    raw.message
        .or(raw.error)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

/// Seconds from the `Retry-After` header, if present and numeric
pub(crate) fn retry_after_secs(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}
