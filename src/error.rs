//! Error types for the AdWire SDK

use thiserror::Error;

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Coerce(#[from] CoerceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

/// API-related errors, mapped from HTTP status classes by the session
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check the API key in your configuration.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0} seconds")]
    RateLimit(u64),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Field coercion errors.
///
/// Raised when a pull/push converter receives a value outside its domain.
/// Unrecognized enum symbols are never an error (they resolve to the codec
/// default), and absent fields simply stay absent.
#[derive(Debug, Error)]
pub enum CoerceError {
    #[error("field `{field}`: expected an integer, got {value}")]
    ExpectedInt { field: String, value: String },

    #[error("field `{field}`: expected a 0/1 flag or boolean, got {value}")]
    ExpectedBool { field: String, value: String },

    #[error("field `{field}`: expected a `%Y-%m-%dT%H:%M:%S` timestamp, got {value}")]
    ExpectedTimestamp { field: String, value: String },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Create ~/.adwire/config.yaml to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("API key not configured. Add `api_key` to your configuration file.")]
    MissingApiKey,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
