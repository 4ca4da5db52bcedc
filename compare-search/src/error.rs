//! Error types for the compare-search crate.
//!
//! Only failures that abort a comparison are represented here. Malformed
//! response bodies and missing listing fields are recovered where they
//! occur and never surface as errors.

/// Errors that can occur while dispatching a product comparison.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// A vendor request failed in transport or returned a non-success status.
    #[error("network error: {0}")]
    Network(String),

    /// A vendor request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Partial results were allowed, but every vendor failed.
    #[error("all vendors failed: {0}")]
    AllVendorsFailed(String),

    /// The search term was empty after trimming.
    #[error("search term must not be empty")]
    EmptyQuery,

    /// Invalid comparison configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl CompareError {
    /// Classify a `reqwest` failure for the named vendor.
    pub(crate) fn from_reqwest(vendor: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(format!("{vendor}: {err}"))
        } else {
            Self::Network(format!("{vendor}: {err}"))
        }
    }
}

/// Convenience type alias for compare-search results.
pub type Result<T> = std::result::Result<T, CompareError>;
