//! Catalog error types.

use thiserror::Error;

/// Errors raised when configuration references unknown catalog ids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A dimension id is not registered in the catalog.
    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    /// A metric id is not registered in the catalog.
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),
}
