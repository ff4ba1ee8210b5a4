//! Dutch postal code classification

use crate::error::{Pro6ppError, Result};
use crate::types::PostalInput;

/// A postal code recognised as one of the two Dutch formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedPostal {
    /// 4-digit area code (`nl_fourpp`)
    Area(String),
    /// 6-character code, 4 digits + 2 letters (`nl_sixpp`)
    Precise(String),
}

impl ClassifiedPostal {
    /// Query parameter name the API expects for this kind of code
    pub fn param_name(&self) -> &'static str {
        match self {
            Self::Area(_) => "nl_fourpp",
            Self::Precise(_) => "nl_sixpp",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Area(v) | Self::Precise(v) => v,
        }
    }

    pub fn into_value(self) -> String {
        match self {
            Self::Area(v) | Self::Precise(v) => v,
        }
    }
}

/// Classify a postal code by its length once all whitespace is removed.
///
/// Only the length is checked: any 6 characters make a precise code and
/// any 4 characters an area code.
pub fn classify(raw: impl Into<PostalInput>) -> Result<ClassifiedPostal> {
    let stripped: String = raw
        .into()
        .normalize()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    match stripped.chars().count() {
        6 => Ok(ClassifiedPostal::Precise(stripped)),
        4 => Ok(ClassifiedPostal::Area(stripped)),
        _ => Err(Pro6ppError::InvalidPostalCode(stripped)),
    }
}
