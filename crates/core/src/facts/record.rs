//! Immutable fact records.

use farol_shared::types::{Currency, FiscalYear, Money, Month};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{DimensionId, MetricId};

use super::value::DimensionValue;

/// One unit of financial activity: a project-month snapshot.
///
/// Dimension fields are discrete keys used for grouping; metric fields
/// are amounts in the record's currency, except `assertiveness`, which
/// is a ratio already expressed as 0-100+.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactRecord {
    /// Business area.
    pub area: String,
    /// Project identifier.
    pub project: String,
    /// Project status.
    pub status: String,
    /// Snapshot month.
    pub month: Month,
    /// Snapshot fiscal year.
    pub year: FiscalYear,
    /// Responsible person.
    pub responsible: String,
    /// Spend category.
    pub category: String,
    /// Currency of the monetary metric fields.
    pub currency: Currency,
    /// Planned/target amount.
    pub target: Decimal,
    /// Actual cost plus remaining plan.
    pub ac_sop: Decimal,
    /// Target minus AC+SOP.
    pub variance: Decimal,
    /// Accuracy ratio (realized / planned * 100).
    pub assertiveness: Decimal,
    /// Committed amount.
    pub committed: Decimal,
    /// Realized amount.
    pub realized: Decimal,
    /// Savings amount.
    pub savings: Decimal,
}

impl FactRecord {
    /// Creates a fact with empty dimensions and zero metrics.
    #[must_use]
    pub fn new(
        project: impl Into<String>,
        month: Month,
        year: FiscalYear,
        currency: Currency,
    ) -> Self {
        Self {
            area: String::new(),
            project: project.into(),
            status: String::new(),
            month,
            year,
            responsible: String::new(),
            category: String::new(),
            currency,
            target: Decimal::ZERO,
            ac_sop: Decimal::ZERO,
            variance: Decimal::ZERO,
            assertiveness: Decimal::ZERO,
            committed: Decimal::ZERO,
            realized: Decimal::ZERO,
            savings: Decimal::ZERO,
        }
    }

    /// Sets the business area.
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the responsible person.
    #[must_use]
    pub fn with_responsible(mut self, responsible: impl Into<String>) -> Self {
        self.responsible = responsible.into();
        self
    }

    /// Sets the spend category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the target amount.
    #[must_use]
    pub const fn with_target(mut self, target: Decimal) -> Self {
        self.target = target;
        self
    }

    /// Sets the AC+SOP amount.
    #[must_use]
    pub const fn with_ac_sop(mut self, ac_sop: Decimal) -> Self {
        self.ac_sop = ac_sop;
        self
    }

    /// Sets the variance amount.
    #[must_use]
    pub const fn with_variance(mut self, variance: Decimal) -> Self {
        self.variance = variance;
        self
    }

    /// Sets the assertiveness ratio.
    #[must_use]
    pub const fn with_assertiveness(mut self, assertiveness: Decimal) -> Self {
        self.assertiveness = assertiveness;
        self
    }

    /// Sets the committed amount.
    #[must_use]
    pub const fn with_committed(mut self, committed: Decimal) -> Self {
        self.committed = committed;
        self
    }

    /// Sets the realized amount.
    #[must_use]
    pub const fn with_realized(mut self, realized: Decimal) -> Self {
        self.realized = realized;
        self
    }

    /// Sets the savings amount.
    #[must_use]
    pub const fn with_savings(mut self, savings: Decimal) -> Self {
        self.savings = savings;
        self
    }

    /// Extracts the typed value of a dimension.
    #[must_use]
    pub fn dimension_value(&self, dimension: DimensionId) -> DimensionValue {
        match dimension {
            DimensionId::Area => DimensionValue::Text(self.area.clone()),
            DimensionId::Project => DimensionValue::Text(self.project.clone()),
            DimensionId::Status => DimensionValue::Text(self.status.clone()),
            DimensionId::Month => DimensionValue::Month(self.month),
            DimensionId::Year => DimensionValue::Year(self.year),
            DimensionId::Responsible => DimensionValue::Text(self.responsible.clone()),
            DimensionId::Category => DimensionValue::Text(self.category.clone()),
        }
    }

    /// Returns the raw value of a metric.
    #[must_use]
    pub const fn metric_value(&self, metric: MetricId) -> Decimal {
        match metric {
            MetricId::Target => self.target,
            MetricId::AcSop => self.ac_sop,
            MetricId::Variance => self.variance,
            MetricId::Assertiveness => self.assertiveness,
            MetricId::Committed => self.committed,
            MetricId::Realized => self.realized,
            MetricId::Savings => self.savings,
        }
    }

    /// Returns a metric value paired with the record's currency.
    #[must_use]
    pub const fn metric_money(&self, metric: MetricId) -> Money {
        Money::new(self.metric_value(metric), self.currency)
    }
}
