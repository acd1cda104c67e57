//! Property-based tests for the filter engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use farol_shared::types::{Currency, Month};

use crate::catalog::DimensionId;
use crate::facts::{DimensionValue, FactRecord};

use super::criteria::{FilterCriterion, FilterSet, Selection};
use super::engine::apply_filters;

fn arbitrary_fact() -> impl Strategy<Value = FactRecord> {
    (
        prop::sample::select(vec!["TI", "RH", "Compras", "Facilities"]),
        prop::sample::select(vec!["P1", "P2", "P3"]),
        prop::sample::select(vec!["Em andamento", "Concluído", "Cancelado"]),
        0usize..12,
        2022i32..2026,
        -1_000_000i64..1_000_000,
    )
        .prop_map(|(area, project, status, month_index, year, target_cents)| {
            FactRecord::new(project, Month::ALL[month_index], year, Currency::Brl)
                .with_area(area)
                .with_status(status)
                .with_target(Decimal::new(target_cents, 2))
        })
}

fn arbitrary_criterion() -> impl Strategy<Value = FilterCriterion> {
    prop_oneof![
        prop::sample::select(vec!["TI", "RH", "Compras"]).prop_map(|value| {
            FilterCriterion::Equals {
                dimension: DimensionId::Area,
                value: value.to_string(),
            }
        }),
        prop::collection::vec(
            prop::sample::select(vec!["Em andamento", "Concluído", "Cancelado"]),
            0..3
        )
        .prop_map(|values| FilterCriterion::In {
            dimension: DimensionId::Status,
            selection: Selection::Values(values.iter().map(ToString::to_string).collect()),
        }),
        (2022i32..2026, 0i32..3).prop_map(|(min, span)| FilterCriterion::Range {
            dimension: DimensionId::Year,
            min: DimensionValue::Year(min),
            max: DimensionValue::Year(min + span),
        }),
        "[a-z]{0,3}".prop_map(|needle| FilterCriterion::Contains {
            needle,
            dimensions: vec![DimensionId::Project, DimensionId::Area],
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Adding a criterion never grows the filtered result.
    #[test]
    fn prop_conjunction_monotonicity(
        facts in prop::collection::vec(arbitrary_fact(), 0..40),
        criteria in prop::collection::vec(arbitrary_criterion(), 0..4),
        extra in arbitrary_criterion(),
    ) {
        let base = FilterSet { criteria: criteria.clone() };
        let extended = base.clone().with(extra);

        let base_len = apply_filters(&facts, &base).unwrap().len();
        let extended_len = apply_filters(&facts, &extended).unwrap().len();

        prop_assert!(
            extended_len <= base_len,
            "adding a criterion grew the result: {} -> {}",
            base_len,
            extended_len
        );
    }

    /// The `All` sentinel is a no-op criterion.
    #[test]
    fn prop_all_sentinel_is_identity(
        facts in prop::collection::vec(arbitrary_fact(), 0..40),
        criteria in prop::collection::vec(arbitrary_criterion(), 0..4),
    ) {
        let base = FilterSet { criteria };
        let with_all = base.clone().with(FilterCriterion::In {
            dimension: DimensionId::Area,
            selection: Selection::All,
        });

        prop_assert_eq!(
            apply_filters(&facts, &base).unwrap(),
            apply_filters(&facts, &with_all).unwrap()
        );
    }

    /// Filtering never invents facts: every retained fact is in the input.
    #[test]
    fn prop_result_is_subset(
        facts in prop::collection::vec(arbitrary_fact(), 0..40),
        criteria in prop::collection::vec(arbitrary_criterion(), 0..4),
    ) {
        let set = FilterSet { criteria };
        let result = apply_filters(&facts, &set).unwrap();
        for fact in &result {
            prop_assert!(facts.contains(fact));
        }
    }
}
