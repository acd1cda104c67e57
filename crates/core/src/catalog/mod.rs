//! Dimension and metric catalog.
//!
//! The catalog is the single source of truth for which fields of a fact
//! are groupable dimensions, which are aggregatable metrics, and how
//! each metric aggregates. Configuration arriving from the UI bridge is
//! validated against it at the boundary.

pub mod dimension;
pub mod error;
pub mod metric;


pub use dimension::{DimensionDescriptor, DimensionId};
pub use error::CatalogError;
pub use metric::{Aggregation, MetricDescriptor, MetricId};

use once_cell::sync::Lazy;

/// The catalog of recognized dimensions and metrics.
#[derive(Debug, Clone)]
pub struct Catalog {
    dimensions: Vec<DimensionDescriptor>,
    metrics: Vec<MetricDescriptor>,
}

static DEFAULT: Lazy<Catalog> = Lazy::new(|| Catalog {
    dimensions: DimensionId::ALL
        .iter()
        .map(|id| DimensionDescriptor::new(*id))
        .collect(),
    metrics: vec![
        MetricDescriptor::sum(MetricId::Target, true),
        MetricDescriptor::sum(MetricId::AcSop, true),
        MetricDescriptor::sum(MetricId::Variance, true),
        // Assertiveness is a per-fact ratio (realized / planned * 100).
        // Summing ratios across a group is a correctness bug; the default
        // is an unweighted average, with a weighted variant available.
        MetricDescriptor::average(MetricId::Assertiveness),
        MetricDescriptor::sum(MetricId::Committed, true),
        MetricDescriptor::sum(MetricId::Realized, true),
        MetricDescriptor::sum(MetricId::Savings, true),
    ],
});

impl Catalog {
    /// Creates a catalog from explicit descriptors.
    #[must_use]
    pub fn new(dimensions: Vec<DimensionDescriptor>, metrics: Vec<MetricDescriptor>) -> Self {
        Self {
            dimensions,
            metrics,
        }
    }

    /// Returns the default catalog for the portfolio dashboard.
    #[must_use]
    pub fn default_catalog() -> &'static Self {
        &DEFAULT
    }

    /// Returns the registered dimension descriptors.
    #[must_use]
    pub fn dimensions(&self) -> &[DimensionDescriptor] {
        &self.dimensions
    }

    /// Returns the registered metric descriptors.
    #[must_use]
    pub fn metrics(&self) -> &[MetricDescriptor] {
        &self.metrics
    }

    /// Looks up a dimension descriptor by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownDimension` if the id is not registered.
    pub fn dimension(&self, id: DimensionId) -> Result<&DimensionDescriptor, CatalogError> {
        self.dimensions
            .iter()
            .find(|descriptor| descriptor.id == id)
            .ok_or_else(|| CatalogError::UnknownDimension(id.to_string()))
    }

    /// Looks up a metric descriptor by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownMetric` if the id is not registered.
    pub fn metric(&self, id: MetricId) -> Result<&MetricDescriptor, CatalogError> {
        self.metrics
            .iter()
            .find(|descriptor| descriptor.id == id)
            .ok_or_else(|| CatalogError::UnknownMetric(id.to_string()))
    }
}
