//! Error types for Fin Assist.

/// Top-level error type for the front end.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Form error: {0}")]
    Form(#[from] FormError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from the `/answer` and `/suggest` endpoints.
///
/// A non-2xx status and a transport fault are handled the same way per
/// endpoint, but the split keeps the failure branches explicit and gives
/// the log the real cause.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("transport error calling {endpoint}: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid response body from {endpoint}: {source}")]
    InvalidBody {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Whether this failure is a non-2xx status rather than a transport fault.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

/// Profile form aggregation errors.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Unknown value for {field}: {value:?}")]
    UnknownValue { field: String, value: String },

    #[error("Credit score {0} is out of range (0-1000)")]
    CreditScoreOutOfRange(u32),
}

/// Result type alias for the front end.
pub type Result<T> = std::result::Result<T, Error>;
