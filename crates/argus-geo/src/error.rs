use thiserror::Error;

/// Top-level error type for the `argus-geo` crate.
///
/// Callers that need the distinction (tests, logging) get it; the
/// [`ReverseLookup`](crate::ReverseLookup) surface swallows all of
/// these into the coordinate fallback.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing or construction error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Geocoder answered with a non-success status.
    #[error("Geocoder returned HTTP {status}")]
    Status { status: u16 },

    /// JSON body did not match the expected shape.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String },
}
