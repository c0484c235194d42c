//! Error types for vendor API calls

use thiserror::Error;

/// Result type alias for vendor client operations
pub type Result<T> = std::result::Result<T, UpstreamError>;

/// Errors that can occur while talking to the vendor API.
///
/// All of these are transport-level: the vendor was unreachable, timed out,
/// or answered outside its HTTP contract. Payload-level problems are the
/// conversion layer's concern and never appear here.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP request failed (connect, timeout, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Vendor answered with a non-success status
    #[error("upstream service returned status {status}")]
    Status { status: u16 },
}

impl UpstreamError {
    /// Create an error from a non-success vendor status code
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }
}
