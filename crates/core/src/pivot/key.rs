//! Structured group keys.

use serde::{Deserialize, Serialize};

use crate::facts::DimensionValue;

/// The ordered tuple of dimension values identifying a pivot group on
/// one axis.
///
/// Keys are structural: identity is the tuple itself, never a joined
/// string, so a dimension value containing a delimiter cannot collide
/// with another key. The empty key is the implicit "Total" group used
/// when an axis has no dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey(pub Vec<DimensionValue>);

impl GroupKey {
    /// The implicit key for an axis with no dimensions.
    #[must_use]
    pub fn total() -> Self {
        Self(Vec::new())
    }

    /// Returns true if this is the implicit total key.
    #[must_use]
    pub fn is_total(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the key's dimension values in axis order.
    #[must_use]
    pub fn values(&self) -> &[DimensionValue] {
        &self.0
    }
}

impl std::fmt::Display for GroupKey {
    /// Renders the key for display. Display output is presentation
    /// only and never used for key identity.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_total() {
            return write!(f, "Total");
        }
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, " / ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl From<Vec<DimensionValue>> for GroupKey {
    fn from(values: Vec<DimensionValue>) -> Self {
        Self(values)
    }
}
