//! Property-based tests for grouping and aggregation.

use std::collections::HashMap;

use proptest::prelude::*;
use rust_decimal::Decimal;

use farol_shared::types::{Currency, Month};

use crate::catalog::{Catalog, DimensionId, MetricId};
use crate::facts::FactRecord;
use crate::rates::RateTable;

use super::aggregate::aggregate;
use super::config::PivotConfiguration;
use super::layout::build_matrix;

fn rates() -> RateTable {
    let mut table = RateTable::new();
    for (currency, rate) in [
        (Currency::Brl, Decimal::new(52, 1)),
        (Currency::Usd, Decimal::ONE),
        (Currency::Eur, Decimal::new(9, 1)),
    ] {
        for year in 2022..=2025 {
            table.insert(year, currency, rate).unwrap();
        }
    }
    table
}

fn arbitrary_fact() -> impl Strategy<Value = FactRecord> {
    (
        prop::sample::select(vec!["TI", "RH", "Compras", "Facilities"]),
        prop::sample::select(vec!["P1", "P2", "P3", "P4", "P5"]),
        0usize..12,
        2022i32..2026,
        prop::sample::select(vec![Currency::Brl, Currency::Usd, Currency::Eur]),
        -10_000_000i64..10_000_000,
        0i64..12_000,
    )
        .prop_map(
            |(area, project, month_index, year, currency, target_cents, ratio_bp)| {
                FactRecord::new(project, Month::ALL[month_index], year, currency)
                    .with_area(area)
                    .with_target(Decimal::new(target_cents, 2))
                    .with_assertiveness(Decimal::new(ratio_bp, 2))
            },
        )
}

fn axis() -> impl Strategy<Value = Vec<DimensionId>> {
    prop::sample::subsequence(
        vec![DimensionId::Area, DimensionId::Project, DimensionId::Month],
        0..=2,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Additive totals are conserved over any partition: the sum of
    /// per-cell sums equals the portfolio-wide total regardless of how
    /// dimensions slice the facts.
    #[test]
    fn prop_sum_conservation(
        facts in prop::collection::vec(arbitrary_fact(), 0..40),
        rows in axis(),
    ) {
        let catalog = Catalog::default_catalog();
        let rates = rates();

        let columns = if rows.contains(&DimensionId::Month) {
            Vec::new()
        } else {
            vec![DimensionId::Month]
        };
        let sliced = PivotConfiguration::new(Currency::Brl, vec![MetricId::Target])
            .with_rows(rows)
            .with_columns(columns);
        let total = PivotConfiguration::new(Currency::Brl, vec![MetricId::Target]);

        let sliced_sum: Decimal = aggregate(&facts, &sliced, catalog, &rates)
            .unwrap()
            .cells
            .iter()
            .map(|cell| cell.metrics[&MetricId::Target])
            .sum();
        let total_sum: Decimal = aggregate(&facts, &total, catalog, &rates)
            .unwrap()
            .cells
            .iter()
            .map(|cell| cell.metrics[&MetricId::Target])
            .sum();

        prop_assert_eq!(sliced_sum, total_sum);
    }

    /// A ratio metric aggregated over a group stays within the group's
    /// per-fact min and max; naive summation would escape the range
    /// for any group of two or more facts.
    #[test]
    fn prop_ratio_bounded_by_group_extremes(
        facts in prop::collection::vec(arbitrary_fact(), 1..40),
    ) {
        let config = PivotConfiguration::new(Currency::Brl, vec![MetricId::Assertiveness])
            .with_rows(vec![DimensionId::Area]);
        let outcome =
            aggregate(&facts, &config, Catalog::default_catalog(), &rates()).unwrap();

        let mut extremes: HashMap<String, (Decimal, Decimal)> = HashMap::new();
        for fact in &facts {
            let entry = extremes
                .entry(fact.area.clone())
                .or_insert((fact.assertiveness, fact.assertiveness));
            entry.0 = entry.0.min(fact.assertiveness);
            entry.1 = entry.1.max(fact.assertiveness);
        }

        for cell in &outcome.cells {
            let area = cell.row_key.values()[0].to_string();
            let (min, max) = extremes[&area];
            let value = cell.metrics[&MetricId::Assertiveness];
            prop_assert!(
                min <= value && value <= max,
                "ratio {} escaped [{}, {}] for area {}",
                value,
                min,
                max,
                area
            );
        }
    }

    /// Aggregation and layout are deterministic for identical inputs,
    /// and source counts account for every fact exactly once.
    #[test]
    fn prop_deterministic_and_counts_partition(
        facts in prop::collection::vec(arbitrary_fact(), 0..40),
        rows in axis(),
    ) {
        let catalog = Catalog::default_catalog();
        let rates = rates();
        let config = PivotConfiguration::new(Currency::Brl, vec![MetricId::Target])
            .with_rows(rows);

        let first = aggregate(&facts, &config, catalog, &rates).unwrap();
        let second = aggregate(&facts, &config, catalog, &rates).unwrap();
        prop_assert_eq!(&first, &second);

        let counted: usize = first.cells.iter().map(|cell| cell.source_count).sum();
        prop_assert_eq!(counted, facts.len());
        for cell in &first.cells {
            prop_assert!(cell.source_count >= 1);
        }

        let matrix_a = build_matrix(&first.cells, &config.row_dimensions, &config.column_dimensions);
        let matrix_b = build_matrix(&second.cells, &config.row_dimensions, &config.column_dimensions);
        prop_assert_eq!(matrix_a, matrix_b);
    }
}
