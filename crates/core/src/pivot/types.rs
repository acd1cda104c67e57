//! Pivot output types.

use std::collections::BTreeMap;

use farol_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::MetricId;
use crate::rates::RateWarning;

use super::key::GroupKey;

/// One aggregated group of facts at a (row, column) position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedCell {
    /// Row axis key.
    pub row_key: GroupKey,
    /// Column axis key.
    pub column_key: GroupKey,
    /// Aggregated value per metric.
    pub metrics: BTreeMap<MetricId, Decimal>,
    /// Number of facts that contributed. Always at least 1: empty
    /// groups are never materialized.
    pub source_count: usize,
}

/// Warning raised while aggregating, carried alongside the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PivotWarning {
    /// A currency rate fallback occurred during normalization.
    Rate(RateWarning),
    /// A weighted ratio fell back to the unweighted average because the
    /// group's total weight was zero.
    ZeroWeightFallback {
        /// Row key of the affected cell.
        row_key: GroupKey,
        /// Column key of the affected cell.
        column_key: GroupKey,
        /// The metric that fell back.
        metric: MetricId,
    },
}

impl std::fmt::Display for PivotWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rate(warning) => write!(f, "{warning}"),
            Self::ZeroWeightFallback {
                row_key,
                column_key,
                metric,
            } => write!(
                f,
                "Zero total weight for {metric} in ({row_key}, {column_key}); reported unweighted average"
            ),
        }
    }
}

/// Result of grouping and aggregation: cells plus degradation warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationOutcome {
    /// The aggregated cells, ordered by (row key, column key).
    pub cells: Vec<AggregatedCell>,
    /// Warnings raised while aggregating, deduplicated.
    pub warnings: Vec<PivotWarning>,
}

/// The metric values rendered at one matrix position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellValues {
    /// Aggregated value per metric.
    pub metrics: BTreeMap<MetricId, Decimal>,
    /// Number of contributing facts.
    pub source_count: usize,
}

/// Row-major pivot matrix for tabular rendering.
///
/// `None` positions mean "no data" for that (row, column) pair, which
/// is distinct from a zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotMatrix {
    /// Distinct row keys present in the cells, sorted.
    pub row_headers: Vec<GroupKey>,
    /// Distinct column keys present in the cells, sorted.
    pub column_headers: Vec<GroupKey>,
    /// One entry per (row header, column header) pair.
    pub matrix: Vec<Vec<Option<CellValues>>>,
}

/// Full output of one pivot run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotReport {
    /// The laid-out matrix.
    pub matrix: PivotMatrix,
    /// The flat aggregated cells feeding the matrix.
    pub cells: Vec<AggregatedCell>,
    /// Degradation warnings to render as caveats.
    pub warnings: Vec<PivotWarning>,
    /// Currency every monetary value is expressed in.
    pub target_currency: Currency,
}
