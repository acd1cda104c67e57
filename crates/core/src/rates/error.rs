//! Exchange rate error types.

use farol_shared::types::{Currency, FiscalYear};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during rate lookup and normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateError {
    /// No rates are configured for the fiscal year.
    #[error("No exchange rates available for fiscal year {0}")]
    MissingYear(FiscalYear),

    /// A rate is required for this currency and the table is in strict mode.
    #[error("No exchange rate for {currency} in fiscal year {year}")]
    MissingCurrency {
        /// Fiscal year of the lookup.
        year: FiscalYear,
        /// Currency the rate was requested for.
        currency: Currency,
    },

    /// Rates must be positive.
    #[error("Invalid rate {rate} for {currency} in fiscal year {year}")]
    InvalidRate {
        /// Fiscal year the rate was registered for.
        year: FiscalYear,
        /// Currency the rate applies to.
        currency: Currency,
        /// The rejected rate value.
        rate: Decimal,
    },
}
