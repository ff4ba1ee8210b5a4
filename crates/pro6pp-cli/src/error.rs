//! Error types for the pro6pp command line tool

use std::fmt;

use pro6pp_api::Pro6ppError;

#[derive(Debug)]
pub enum CliError {
    Api(Pro6ppError),
    Config(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Api(err) => write!(f, "{}", err),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Api(err) => Some(err),
            CliError::Config(_) => None,
        }
    }
}

impl From<Pro6ppError> for CliError {
    fn from(err: Pro6ppError) -> Self {
        match err {
            Pro6ppError::Config(msg) => CliError::Config(msg),
            other => CliError::Api(other),
        }
    }
}

impl From<tracing_subscriber::filter::ParseError> for CliError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        CliError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
