//! Pivot configuration.

use farol_shared::types::Currency;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, DimensionId, MetricId};
use crate::filter::FilterSet;

use super::error::PivotError;

/// A snapshot of the user's pivot selection.
///
/// Owned and mutated by the UI layer; the engine treats it as an input
/// value per invocation and holds no state between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotConfiguration {
    /// Ordered row axis dimensions (outer to inner), no duplicates.
    pub row_dimensions: Vec<DimensionId>,
    /// Ordered column axis dimensions, disjoint from the row axis.
    pub column_dimensions: Vec<DimensionId>,
    /// Conjunctive filter set applied before grouping.
    pub filters: FilterSet,
    /// Currency every monetary metric is normalized into.
    pub target_currency: Currency,
    /// Metrics to aggregate, in display order.
    pub metrics: Vec<MetricId>,
}

impl PivotConfiguration {
    /// Creates a configuration with no dimensions and no filters:
    /// a portfolio-wide total in the target currency.
    #[must_use]
    pub fn new(target_currency: Currency, metrics: Vec<MetricId>) -> Self {
        Self {
            row_dimensions: Vec::new(),
            column_dimensions: Vec::new(),
            filters: FilterSet::new(),
            target_currency,
            metrics,
        }
    }

    /// Sets the row axis dimensions.
    #[must_use]
    pub fn with_rows(mut self, dimensions: Vec<DimensionId>) -> Self {
        self.row_dimensions = dimensions;
        self
    }

    /// Sets the column axis dimensions.
    #[must_use]
    pub fn with_columns(mut self, dimensions: Vec<DimensionId>) -> Self {
        self.column_dimensions = dimensions;
        self
    }

    /// Sets the filter set.
    #[must_use]
    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    /// Validates the configuration against the catalog.
    ///
    /// Checks axis uniqueness and disjointness, catalog membership of
    /// every referenced id, and filter operands. Fails fast: no facts
    /// are processed if validation fails.
    ///
    /// # Errors
    ///
    /// Returns the first `PivotError` found.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), PivotError> {
        for axis in [&self.row_dimensions, &self.column_dimensions] {
            for (index, dimension) in axis.iter().enumerate() {
                if axis[..index].contains(dimension) {
                    return Err(PivotError::DuplicateDimension(*dimension));
                }
            }
        }
        if let Some(shared) = self
            .row_dimensions
            .iter()
            .find(|dimension| self.column_dimensions.contains(dimension))
        {
            return Err(PivotError::OverlappingAxes(*shared));
        }

        for dimension in self.row_dimensions.iter().chain(&self.column_dimensions) {
            catalog.dimension(*dimension)?;
        }
        for metric in &self.metrics {
            catalog.metric(*metric)?;
        }

        self.filters.validate()?;
        Ok(())
    }
}
