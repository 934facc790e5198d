//! Error types for the Steam Web API client
//!
//! Every request-scoped failure is a variant of [`Error`]. Each variant
//! carries a fixed, machine-readable reason string (see [`Error::reason`])
//! alongside whatever detail is useful for logging.

use thiserror::Error;

/// Reason strings reported for each error kind
pub mod reason {
    pub const METHOD_NOT_EXIST: &str = "That API method does not exist";
    pub const PARAMETERS_INVALID_FORMAT: &str = "Parameters were not provided as an object";
    pub const API_KEY_NOT_SET: &str = "API key is not set";
    pub const PARAMETERS_INVALID_VALUE: &str = "Required parameters are present but invalid";
    pub const PARAMETERS_MISSING: &str = "Missing parameter(s)";
    pub const DECODE_FAILED: &str = "Response could not be decoded";
    pub const INVALID_REQUEST_STATUS: &str =
        "The response from the server returned an invalid state";
    pub const TIMED_OUT: &str = "Request timed out";
    pub const CANCELLED: &str = "Request was cancelled";
    pub const INVALID_CONFIG: &str = "Invalid client configuration";
}

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("That API method does not exist: {method}")]
    MethodNotFound { method: String },

    #[error("Parameters were not provided as an object: {message}")]
    ParametersInvalidFormat { message: String },

    #[error("API key is not set (required by {method})")]
    ApiKeyNotSet { method: String },

    #[error("Invalid value for parameter '{parameter}': {message}")]
    ParametersInvalid { parameter: String, message: String },

    #[error("Missing parameter(s) for {method}: {}", .missing.join(", "))]
    ParametersMissing { method: String, missing: Vec<String> },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Request was cancelled")]
    Cancelled,

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("XML parsing error: {message}")]
    XmlParse { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a method-not-found error
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::MethodNotFound {
            method: method.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_param(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParametersInvalid {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create an invalid parameter format error
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::ParametersInvalidFormat {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an XML parse error
    pub fn xml(message: impl Into<String>) -> Self {
        Self::XmlParse {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The fixed reason string for this error kind
    pub fn reason(&self) -> &'static str {
        match self {
            Error::MethodNotFound { .. } => reason::METHOD_NOT_EXIST,
            Error::ParametersInvalidFormat { .. } => reason::PARAMETERS_INVALID_FORMAT,
            Error::ApiKeyNotSet { .. } => reason::API_KEY_NOT_SET,
            Error::ParametersInvalid { .. } => reason::PARAMETERS_INVALID_VALUE,
            Error::ParametersMissing { .. } => reason::PARAMETERS_MISSING,
            Error::Transport(_) | Error::HttpStatus { .. } | Error::InvalidUrl(_) => {
                reason::INVALID_REQUEST_STATUS
            }
            Error::Timeout { .. } => reason::TIMED_OUT,
            Error::Cancelled => reason::CANCELLED,
            Error::Decode { .. } | Error::JsonParse(_) | Error::XmlParse { .. } => {
                reason::DECODE_FAILED
            }
            Error::InvalidConfigValue { .. } | Error::YamlParse(_) => {
                reason::INVALID_CONFIG
            }
        }
    }

    /// Whether this error was raised before any network I/O happened
    pub fn is_rejected_locally(&self) -> bool {
        matches!(
            self,
            Error::MethodNotFound { .. }
                | Error::ParametersInvalidFormat { .. }
                | Error::ApiKeyNotSet { .. }
                | Error::ParametersInvalid { .. }
                | Error::ParametersMissing { .. }
        )
    }

    /// Whether this error came from the HTTP exchange itself
    pub fn is_http(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::HttpStatus { .. } | Error::Timeout { .. }
        )
    }
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;
