//! Year-keyed exchange rate table.

use std::collections::{BTreeMap, HashMap};

use farol_shared::types::{Currency, FiscalYear};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::RateError;

/// Exchange rates keyed by fiscal year and currency.
///
/// Every rate is expressed relative to a common base currency
/// (1 unit of base = rate units of the currency). Rates for a
/// given amount are always looked up with the fact's own fiscal
/// year, not the reporting year.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateTable {
    rates: BTreeMap<FiscalYear, HashMap<Currency, Decimal>>,
}

impl RateTable {
    /// Creates an empty rate table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rate for a currency in a fiscal year.
    ///
    /// # Errors
    ///
    /// Returns `RateError::InvalidRate` if the rate is not positive.
    pub fn insert(
        &mut self,
        year: FiscalYear,
        currency: Currency,
        rate: Decimal,
    ) -> Result<(), RateError> {
        if rate <= Decimal::ZERO {
            return Err(RateError::InvalidRate {
                year,
                currency,
                rate,
            });
        }
        self.rates.entry(year).or_default().insert(currency, rate);
        Ok(())
    }

    /// Builder-style rate registration.
    ///
    /// # Errors
    ///
    /// Returns `RateError::InvalidRate` if the rate is not positive.
    pub fn with_rate(
        mut self,
        year: FiscalYear,
        currency: Currency,
        rate: Decimal,
    ) -> Result<Self, RateError> {
        self.insert(year, currency, rate)?;
        Ok(self)
    }

    /// Returns true if the fiscal year has any rates.
    #[must_use]
    pub fn has_year(&self, year: FiscalYear) -> bool {
        self.rates.contains_key(&year)
    }

    /// Looks up the rate for a currency in a fiscal year.
    #[must_use]
    pub fn rate(&self, year: FiscalYear, currency: Currency) -> Option<Decimal> {
        self.rates.get(&year).and_then(|by_currency| by_currency.get(&currency)).copied()
    }

    /// Returns the fiscal years with rates, in ascending order.
    pub fn years(&self) -> impl Iterator<Item = FiscalYear> + '_ {
        self.rates.keys().copied()
    }

    /// Returns true if no rates are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
