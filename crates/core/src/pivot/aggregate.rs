//! Grouping and per-cell aggregation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::catalog::{Aggregation, Catalog, MetricId};
use crate::facts::FactRecord;
use crate::rates::{normalize, RateTable};

use super::config::PivotConfiguration;
use super::error::PivotError;
use super::key::GroupKey;
use super::types::{AggregatedCell, AggregationOutcome, PivotWarning};

#[derive(Debug, Default)]
struct MetricAccumulator {
    sum: Decimal,
    count: usize,
    weighted_sum: Decimal,
    weight_sum: Decimal,
}

#[derive(Debug, Default)]
struct CellAccumulator {
    metrics: BTreeMap<MetricId, MetricAccumulator>,
    source_count: usize,
}

/// Groups facts by the configured axes and aggregates each cell's
/// metrics.
///
/// Monetary metrics are normalized to the target currency per fact,
/// before any summation, using each fact's own fiscal year for the
/// rate lookup. Summing first and converting after is mathematically
/// invalid when source currencies differ across group members.
///
/// Cells come back ordered by (row key, column key); chronological
/// dimensions order chronologically because group keys are typed.
/// Empty groups are never materialized, so `source_count >= 1` holds
/// for every cell.
///
/// # Errors
///
/// Returns a `PivotError` if a referenced id is not in the catalog or
/// a fact's fiscal year is absent from the rate table.
pub fn aggregate(
    facts: &[FactRecord],
    config: &PivotConfiguration,
    catalog: &Catalog,
    rates: &RateTable,
) -> Result<AggregationOutcome, PivotError> {
    let mut groups: BTreeMap<(GroupKey, GroupKey), CellAccumulator> = BTreeMap::new();
    let mut warnings: Vec<PivotWarning> = Vec::new();

    for fact in facts {
        let row_key = group_key(fact, &config.row_dimensions);
        let column_key = group_key(fact, &config.column_dimensions);
        let cell = groups.entry((row_key, column_key)).or_default();
        cell.source_count += 1;

        for metric_id in &config.metrics {
            let descriptor = catalog.metric(*metric_id)?;
            let value = metric_value(fact, *metric_id, descriptor.monetary, config, rates, &mut warnings)?;

            let accumulator = cell.metrics.entry(*metric_id).or_default();
            accumulator.sum += value;
            accumulator.count += 1;

            if let Aggregation::WeightedRatio { weight_by } = descriptor.aggregation {
                let weight_monetary = catalog.metric(weight_by)?.monetary;
                let weight =
                    metric_value(fact, weight_by, weight_monetary, config, rates, &mut warnings)?;
                accumulator.weighted_sum += value * weight;
                accumulator.weight_sum += weight;
            }
        }
    }

    let empty_state = MetricAccumulator::default();
    let mut cells = Vec::with_capacity(groups.len());
    for ((row_key, column_key), accumulator) in groups {
        let mut metrics = BTreeMap::new();
        for metric_id in &config.metrics {
            let descriptor = catalog.metric(*metric_id)?;
            let state = accumulator.metrics.get(metric_id).unwrap_or(&empty_state);
            let value = match descriptor.aggregation {
                Aggregation::Sum => state.sum,
                Aggregation::Average => unweighted_average(state),
                Aggregation::WeightedRatio { .. } => {
                    if state.weight_sum.is_zero() {
                        warn!(
                            metric = %metric_id,
                            row = %row_key,
                            column = %column_key,
                            "zero total weight; falling back to unweighted average"
                        );
                        push_unique(
                            &mut warnings,
                            PivotWarning::ZeroWeightFallback {
                                row_key: row_key.clone(),
                                column_key: column_key.clone(),
                                metric: *metric_id,
                            },
                        );
                        unweighted_average(state)
                    } else {
                        state.weighted_sum / state.weight_sum
                    }
                }
            };
            metrics.insert(*metric_id, value);
        }
        cells.push(AggregatedCell {
            row_key,
            column_key,
            metrics,
            source_count: accumulator.source_count,
        });
    }

    debug!(facts = facts.len(), cells = cells.len(), "aggregated facts");

    Ok(AggregationOutcome { cells, warnings })
}

fn group_key(fact: &FactRecord, dimensions: &[crate::catalog::DimensionId]) -> GroupKey {
    GroupKey(
        dimensions
            .iter()
            .map(|dimension| fact.dimension_value(*dimension))
            .collect(),
    )
}

fn metric_value(
    fact: &FactRecord,
    metric: MetricId,
    monetary: bool,
    config: &PivotConfiguration,
    rates: &RateTable,
    warnings: &mut Vec<PivotWarning>,
) -> Result<Decimal, PivotError> {
    if !monetary {
        return Ok(fact.metric_value(metric));
    }
    let normalized = normalize(
        rates,
        fact.metric_money(metric),
        fact.year,
        config.target_currency,
    )?;
    for warning in normalized.warnings {
        push_unique(warnings, PivotWarning::Rate(warning));
    }
    Ok(normalized.money.amount)
}

fn unweighted_average(state: &MetricAccumulator) -> Decimal {
    // Cells only exist for contributing facts, so count >= 1.
    state.sum / Decimal::from(state.count.max(1))
}

fn push_unique(warnings: &mut Vec<PivotWarning>, warning: PivotWarning) {
    if !warnings.contains(&warning) {
        warnings.push(warning);
    }
}
