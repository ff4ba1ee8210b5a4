//! Error types for the Pro6pp client

use std::fmt;

/// Errors that can occur when talking to the Pro6pp API
#[derive(Debug)]
pub enum Pro6ppError {
    /// Postal code is neither a 4-character area nor a 6-character precise code
    InvalidPostalCode(String),
    /// Base URL could not be parsed or joined with an endpoint path
    InvalidUrl(String),
    /// HTTP request failed (connect, timeout, body read)
    Http(reqwest::Error),
    /// API answered with a non-success status
    Status { status: u16, body: String },
    /// Invalid client configuration value
    Config(String),
}

impl fmt::Display for Pro6ppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPostalCode(code) => write!(
                f,
                "No valid postal code was found (nl_sixpp or nl_fourpp): {:?}",
                code
            ),
            Self::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            Self::Http(e) => write!(f, "Pro6pp HTTP error: {}", e),
            Self::Status { status, .. } => write!(f, "Pro6pp returned status {}", status),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Pro6ppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Pro6ppError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<url::ParseError> for Pro6ppError {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidUrl(e.to_string())
    }
}

/// Result type for Pro6pp client operations
pub type Result<T> = std::result::Result<T, Pro6ppError>;
