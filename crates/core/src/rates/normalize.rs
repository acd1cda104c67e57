//! Currency normalization.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Always round converted amounts to 4 decimal places
//! - Use banker's rounding (round half to even)
//! - Same-currency normalization is exact, no rounding round-trip

use farol_shared::types::{Currency, FiscalYear, Money};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::RateError;
use super::table::RateTable;

/// Decimal places kept after a cross-currency conversion.
const CONVERSION_SCALE: u32 = 4;

/// Warning raised when normalization degraded instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateWarning {
    /// A currency had no rate in an otherwise-known year; rate 1 was used.
    MissingRate {
        /// Fiscal year of the lookup.
        year: FiscalYear,
        /// Currency that fell back to rate 1.
        currency: Currency,
    },
}

impl std::fmt::Display for RateWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRate { year, currency } => {
                write!(f, "No rate for {currency} in {year}; assumed rate 1")
            }
        }
    }
}

/// Result of a normalization, carrying any degradation warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalized {
    /// The normalized amount in the target currency.
    pub money: Money,
    /// Warnings raised while normalizing (rate fallbacks).
    pub warnings: Vec<RateWarning>,
}

/// Converts an amount to the target currency for a fiscal year.
///
/// Both rates are expressed relative to a common base currency, so the
/// conversion is `amount / rate(source) * rate(target)`, rounded to 4
/// decimal places with banker's rounding. Same-currency input is
/// returned unchanged, with no rounding applied.
///
/// A currency missing within a known year falls back to rate 1; the
/// fallback is surfaced in `Normalized::warnings` and logged, never
/// swallowed.
///
/// # Errors
///
/// Returns `RateError::MissingYear` if the fiscal year is absent from
/// the table entirely.
pub fn normalize(
    table: &RateTable,
    money: Money,
    year: FiscalYear,
    target: Currency,
) -> Result<Normalized, RateError> {
    if money.currency == target {
        return Ok(Normalized {
            money,
            warnings: Vec::new(),
        });
    }

    if !table.has_year(year) {
        return Err(RateError::MissingYear(year));
    }

    let mut warnings = Vec::new();
    let source_rate = rate_or_fallback(table, year, money.currency, &mut warnings);
    let target_rate = rate_or_fallback(table, year, target, &mut warnings);

    let converted = (money.amount / source_rate * target_rate)
        .round_dp_with_strategy(CONVERSION_SCALE, RoundingStrategy::MidpointNearestEven);

    Ok(Normalized {
        money: Money::new(converted, target),
        warnings,
    })
}

fn rate_or_fallback(
    table: &RateTable,
    year: FiscalYear,
    currency: Currency,
    warnings: &mut Vec<RateWarning>,
) -> Decimal {
    table.rate(year, currency).unwrap_or_else(|| {
        warn!(%currency, year, "no exchange rate in known year; assuming rate 1");
        warnings.push(RateWarning::MissingRate { year, currency });
        Decimal::ONE
    })
}
