//! Value types shared by the Pro6pp client operations

use std::fmt;
use std::str::FromStr;

use crate::error::Pro6ppError;

/// A postal code as handed in by a caller, before classification.
///
/// Numbers are rendered as their decimal string; text is used verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostalInput {
    Text(String),
    Number(u32),
}

impl PostalInput {
    /// Canonical string form used for classification and query encoding
    pub fn normalize(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for PostalInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PostalInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for PostalInput {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<u16> for PostalInput {
    fn from(n: u16) -> Self {
        Self::Number(u32::from(n))
    }
}

impl From<u32> for PostalInput {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

/// Response body format requested from the API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
    Csv,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseFormat {
    type Err = Pro6ppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            "csv" => Ok(Self::Csv),
            other => Err(Pro6ppError::Config(format!(
                "unsupported response format: {}",
                other
            ))),
        }
    }
}

/// Distance calculation mode for the `distance` endpoint.
///
/// `Road` is only available on supported accounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistanceAlgorithm {
    #[default]
    Road,
    Straight,
}

impl DistanceAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Road => "road",
            Self::Straight => "straight",
        }
    }
}

impl fmt::Display for DistanceAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceAlgorithm {
    type Err = Pro6ppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "road" => Ok(Self::Road),
            "straight" => Ok(Self::Straight),
            other => Err(Pro6ppError::Config(format!(
                "unsupported distance algorithm: {}",
                other
            ))),
        }
    }
}
