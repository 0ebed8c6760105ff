//! Error types for the PA-API client.

use thiserror::Error;

/// Maximum characters of a non-200 response body kept for diagnosis.
pub(crate) const HTTP_BODY_LIMIT: usize = 500;

/// Maximum characters of a declared `Errors` list kept for diagnosis.
pub(crate) const API_ERRORS_LIMIT: usize = 800;

/// Failures raised by the PA-API client and orchestrator.
#[derive(Debug, Error)]
pub enum PaapiError {
    /// A required credential is empty. Raised by config validation before
    /// any request is attempted.
    #[error("missing required credential: {0} (set PAAPI_ACCESS_KEY, PAAPI_SECRET_KEY, PAAPI_PARTNER_TAG)")]
    MissingCredential(&'static str),

    /// Non-200 HTTP status. The body is truncated for diagnosis.
    #[error("PA-API HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// A 200 response that declares errors in its `Errors` array.
    #[error("PA-API Errors: {0}")]
    Api(String),

    /// The request exceeded the configured timeout. Callers treat this the
    /// same as any other transport failure.
    #[error("PA-API request timed out")]
    Timeout,

    /// Any other client-side failure (connect, TLS, body read).
    #[error("PA-API request failed: {0}")]
    Transport(#[from] wreq::Error),

    /// A success response whose body was not the expected JSON.
    #[error("PA-API response decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Truncates to at most `limit` characters, on a character boundary.
pub(crate) fn truncate_chars(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect()
}
