//! Property-based tests for currency normalization.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use farol_shared::types::{Currency, Money};

use super::normalize::normalize;
use super::table::RateTable;

/// Strategy to generate amounts (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to pick one of the supported currencies.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(vec![
        Currency::Brl,
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
    ])
}

fn full_table(rates: &[(Currency, Decimal)]) -> RateTable {
    let mut table = RateTable::new();
    for (currency, rate) in rates {
        table.insert(2024, *currency, *rate).unwrap();
    }
    table
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Normalizing to the amount's own currency is the identity, exactly.
    #[test]
    fn prop_identity(amount in amount(), currency in currency(), rate in positive_rate()) {
        let table = full_table(&[(currency, rate)]);
        let money = Money::new(amount, currency);
        let result = normalize(&table, money, 2024, currency).unwrap();
        prop_assert_eq!(result.money, money);
        prop_assert!(result.warnings.is_empty());
    }

    /// A-to-B-to-A round-trips within rounding tolerance.
    #[test]
    fn prop_round_trip(
        amount in amount(),
        rate_a in positive_rate(),
        rate_b in positive_rate(),
    ) {
        let table = full_table(&[(Currency::Usd, rate_a), (Currency::Brl, rate_b)]);
        let money = Money::new(amount, Currency::Usd);

        let there = normalize(&table, money, 2024, Currency::Brl).unwrap();
        let back = normalize(&table, there.money, 2024, Currency::Usd).unwrap();

        // Two 4-dp roundings; the error bound scales with the rate ratio.
        let tolerance = (Decimal::new(1, 4) * (Decimal::ONE + rate_a / rate_b))
            .round_dp(4);
        let diff = (back.money.amount - amount).abs();
        prop_assert!(
            diff <= tolerance,
            "round-trip drifted by {} (tolerance {})",
            diff,
            tolerance
        );
    }

    /// Normalization is deterministic for identical inputs.
    #[test]
    fn prop_deterministic(
        amount in amount(),
        rate_a in positive_rate(),
        rate_b in positive_rate(),
    ) {
        let table = full_table(&[(Currency::Usd, rate_a), (Currency::Eur, rate_b)]);
        let money = Money::new(amount, Currency::Usd);
        let first = normalize(&table, money, 2024, Currency::Eur).unwrap();
        let second = normalize(&table, money, 2024, Currency::Eur).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Sign is preserved by conversion with positive rates.
    #[test]
    fn prop_sign_preserved(
        amount in amount(),
        rate_a in positive_rate(),
        rate_b in positive_rate(),
    ) {
        let table = full_table(&[(Currency::Usd, rate_a), (Currency::Brl, rate_b)]);
        let money = Money::new(amount, Currency::Usd);
        let result = normalize(&table, money, 2024, Currency::Brl).unwrap();
        if amount > dec!(1) {
            prop_assert!(result.money.amount >= Decimal::ZERO);
        } else if amount < dec!(-1) {
            prop_assert!(result.money.amount <= Decimal::ZERO);
        }
    }
}
