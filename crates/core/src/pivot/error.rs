//! Pivot error types.

use thiserror::Error;

use crate::catalog::{CatalogError, DimensionId};
use crate::filter::FilterError;
use crate::rates::RateError;

/// Errors that can occur while validating or running a pivot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PivotError {
    /// A dimension appears more than once on the same axis.
    #[error("Dimension {0} appears more than once on an axis")]
    DuplicateDimension(DimensionId),

    /// A dimension appears on both the row and column axes.
    #[error("Dimension {0} is assigned to both axes")]
    OverlappingAxes(DimensionId),

    /// The configuration references an id not in the catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The filter set is invalid.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Currency normalization failed.
    #[error(transparent)]
    Rate(#[from] RateError),
}
