//! Filter error types.

use thiserror::Error;

use crate::catalog::DimensionId;
use crate::facts::DimensionValue;

/// Errors raised when a filter set is invalid.
///
/// Validation rejects the whole set before any fact is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A range filter has min greater than max.
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Lower bound of the rejected range.
        min: DimensionValue,
        /// Upper bound of the rejected range.
        max: DimensionValue,
    },

    /// A range filter targets a dimension without a natural order.
    #[error("Dimension {0} does not support range filters")]
    NonComparableDimension(DimensionId),

    /// A range bound's type does not match the dimension.
    #[error("Operand type does not match dimension {0}")]
    OperandMismatch(DimensionId),

    /// A free-text filter has no dimensions to search.
    #[error("Free-text filter has an empty search scope")]
    EmptySearchScope,
}
