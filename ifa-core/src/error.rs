/// Error types for the advisory toolkit
use thiserror::Error;

/// Main error type for advisory operations
#[derive(Error, Debug)]
pub enum AdvisoryError {
    /// Required selection fields are missing; recovered locally, never
    /// reaches the network
    #[error("{0}")]
    Validation(String),

    /// Transport-level failure reaching the backend (includes timeouts)
    #[cfg(feature = "api")]
    #[error("Advisory backend unavailable: {0}")]
    BackendUnavailable(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("Request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    /// Backend answered 2xx but the body did not match the contract
    #[error("Failed to parse backend response: {0}")]
    ResponseParse(String),

    /// Failed to parse embedded fallback CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),
}

/// Type alias for Results using AdvisoryError
pub type Result<T> = std::result::Result<T, AdvisoryError>;
