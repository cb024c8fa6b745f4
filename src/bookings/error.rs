/// Message stored in the error cell when a lookup fails.
pub const FETCH_BOOKING_FAILED: &str = "Failed to fetch booking";

/// Errors returned by a `BookingsApi` implementation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid base path: {0}")]
    InvalidBasePath(String),

    /// The service returned 404 for the requested booking.
    #[error("resource not found")]
    NotFound,

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("deserialization failed: {0}")]
    Decode(String),
}

/// A failed store lookup. Displays as the fixed user-facing message; the
/// underlying `ApiError` is available through `source()`.
#[derive(Debug, thiserror::Error)]
#[error("Failed to fetch booking")]
pub struct LookupError {
    pub booking_id: String,
    #[source]
    pub source: ApiError,
}
