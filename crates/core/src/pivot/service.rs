//! Pivot pipeline orchestration.

use farol_shared::types::Currency;
use farol_shared::EngineConfig;
use tracing::{debug, warn};

use crate::catalog::{Catalog, DimensionId};
use crate::facts::FactRecord;
use crate::filter::{apply_filters, FilterCriterion};
use crate::rates::{RateError, RateTable, RateWarning};

use super::aggregate::aggregate;
use super::config::PivotConfiguration;
use super::error::PivotError;
use super::layout::build_matrix;
use super::types::{PivotReport, PivotWarning};

/// Service running the full pivot pipeline:
/// validate, filter, aggregate, lay out.
///
/// Stateless per call: the consuming UI re-invokes the pipeline on
/// every interaction rather than patching a prior result, so each run
/// is a pure function of its inputs. Ambient settings (strict rates,
/// search scope, default currency) come from `EngineConfig`.
#[derive(Debug, Clone)]
pub struct PivotService {
    config: EngineConfig,
}

impl PivotService {
    /// Creates a service with the given ambient configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Creates a service with default ambient configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Returns the configured default target currency.
    ///
    /// Falls back to BRL if the configured code is unknown.
    #[must_use]
    pub fn default_target_currency(&self) -> Currency {
        self.config
            .reporting
            .target_currency
            .parse()
            .unwrap_or_else(|_| {
                warn!(
                    code = %self.config.reporting.target_currency,
                    "unknown configured target currency; using BRL"
                );
                Currency::Brl
            })
    }

    /// Builds a free-text search criterion over the configured
    /// search dimensions.
    #[must_use]
    pub fn search_criterion(&self, needle: impl Into<String>) -> FilterCriterion {
        let dimensions: Vec<DimensionId> = self
            .config
            .reporting
            .search_dimensions
            .iter()
            .filter_map(|name| {
                name.parse()
                    .map_err(|_| warn!(%name, "ignoring unknown search dimension"))
                    .ok()
            })
            .collect();
        FilterCriterion::Contains {
            needle: needle.into(),
            dimensions,
        }
    }

    /// Runs the full pipeline over a read-only fact collection.
    ///
    /// In strict-rates mode a currency missing within a known year is
    /// promoted from a warning to an error.
    ///
    /// # Errors
    ///
    /// Returns a `PivotError` on invalid configuration or missing
    /// exchange rates.
    pub fn run(
        &self,
        facts: &[FactRecord],
        pivot: &PivotConfiguration,
        catalog: &Catalog,
        rates: &RateTable,
    ) -> Result<PivotReport, PivotError> {
        pivot.validate(catalog)?;

        let filtered = apply_filters(facts, &pivot.filters)?;
        let outcome = aggregate(&filtered, pivot, catalog, rates)?;

        if self.config.rates.strict {
            for warning in &outcome.warnings {
                if let PivotWarning::Rate(RateWarning::MissingRate { year, currency }) = warning {
                    return Err(PivotError::Rate(RateError::MissingCurrency {
                        year: *year,
                        currency: *currency,
                    }));
                }
            }
        }

        let matrix = build_matrix(
            &outcome.cells,
            &pivot.row_dimensions,
            &pivot.column_dimensions,
        );

        debug!(
            rows = matrix.row_headers.len(),
            columns = matrix.column_headers.len(),
            warnings = outcome.warnings.len(),
            "pivot pipeline complete"
        );

        Ok(PivotReport {
            matrix,
            cells: outcome.cells,
            warnings: outcome.warnings,
            target_currency: pivot.target_currency,
        })
    }
}

impl Default for PivotService {
    fn default() -> Self {
        Self::with_defaults()
    }
}
