//! Error types for the exchange-rate service.

/// Failures of the upstream rate fetch.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("upstream returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("no exchange rate data found")]
    NoData,
}

/// Failures of the rate persistence step.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("persistence deadline exceeded")]
    PersistTimeout,

    #[error("database error: {0}")]
    Persist(String),
}

/// Application-level errors (for HTTP responses).
///
/// Both variants surface as the same server-error status; only the message
/// tells a fetch failure apart from a persistence failure.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Failed to fetch exchange rate: {0}")]
    Fetch(#[from] ProviderError),

    #[error("Failed to save to database: {0}")]
    Persist(#[from] StoreError),
}
