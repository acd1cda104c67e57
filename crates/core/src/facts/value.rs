//! Typed dimension values.

use farol_shared::types::{FiscalYear, Month};
use serde::{Deserialize, Serialize};

/// The value of one dimension of a fact.
///
/// Values are typed rather than stringified so that period dimensions
/// order chronologically and group keys are structured tuples instead
/// of delimiter-joined strings (a value containing the delimiter can
/// never collide with a composite key).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DimensionValue {
    /// A calendar month; orders Jan..Dez.
    Month(Month),
    /// A fiscal year; orders numerically.
    Year(FiscalYear),
    /// An opaque discrete key; orders lexically.
    Text(String),
}

impl std::fmt::Display for DimensionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Month(month) => write!(f, "{month}"),
            Self::Year(year) => write!(f, "{year}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

impl DimensionValue {
    /// Returns the text content for string matching, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Month(_) | Self::Year(_) => None,
        }
    }
}

impl From<&str> for DimensionValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
