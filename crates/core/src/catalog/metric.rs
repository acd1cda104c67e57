//! Aggregatable metric identifiers and descriptors.

use serde::{Deserialize, Serialize};

/// Identifier of an aggregatable fact metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    /// Planned/target amount (SOP) for the period.
    Target,
    /// Actual cost plus remaining plan ("AC+SOP").
    AcSop,
    /// Target minus AC+SOP.
    Variance,
    /// Accuracy ratio, realized / planned * 100.
    Assertiveness,
    /// Committed amount.
    Committed,
    /// Realized amount.
    Realized,
    /// Savings amount.
    Savings,
}

impl std::fmt::Display for MetricId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            Self::Target => "target",
            Self::AcSop => "ac_sop",
            Self::Variance => "variance",
            Self::Assertiveness => "assertiveness",
            Self::Committed => "committed",
            Self::Realized => "realized",
            Self::Savings => "savings",
        };
        write!(f, "{id}")
    }
}

impl std::str::FromStr for MetricId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "target" => Ok(Self::Target),
            "ac_sop" => Ok(Self::AcSop),
            "variance" => Ok(Self::Variance),
            "assertiveness" => Ok(Self::Assertiveness),
            "committed" => Ok(Self::Committed),
            "realized" => Ok(Self::Realized),
            "savings" => Ok(Self::Savings),
            _ => Err(format!("Unknown metric: {s}")),
        }
    }
}

/// How a metric aggregates across a group of facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Arithmetic sum (additive amounts).
    Sum,
    /// Unweighted arithmetic mean (per-fact ratios).
    Average,
    /// Average weighted by another metric's summed value.
    WeightedRatio {
        /// Metric supplying the weights.
        weight_by: MetricId,
    },
}

/// Descriptor for an aggregatable metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricDescriptor {
    /// Metric identifier.
    pub id: MetricId,
    /// Human-readable name for display.
    pub display_name: String,
    /// Aggregation kind applied per group.
    pub aggregation: Aggregation,
    /// Whether values carry a currency and must be normalized before
    /// aggregation.
    pub monetary: bool,
}

impl MetricDescriptor {
    /// Creates a sum-aggregated descriptor.
    #[must_use]
    pub fn sum(id: MetricId, monetary: bool) -> Self {
        Self {
            id,
            display_name: default_display_name(id),
            aggregation: Aggregation::Sum,
            monetary,
        }
    }

    /// Creates an average-aggregated, non-monetary descriptor.
    #[must_use]
    pub fn average(id: MetricId) -> Self {
        Self {
            id,
            display_name: default_display_name(id),
            aggregation: Aggregation::Average,
            monetary: false,
        }
    }

    /// Creates a weighted-ratio descriptor.
    ///
    /// The group value is the average of this metric weighted by the
    /// summed value of `weight_by`, so higher financial exposure
    /// dominates the represented ratio.
    #[must_use]
    pub fn weighted_ratio(id: MetricId, weight_by: MetricId) -> Self {
        Self {
            id,
            display_name: default_display_name(id),
            aggregation: Aggregation::WeightedRatio { weight_by },
            monetary: false,
        }
    }
}

fn default_display_name(id: MetricId) -> String {
    let name = match id {
        MetricId::Target => "Target",
        MetricId::AcSop => "AC+SOP",
        MetricId::Variance => "Desvio",
        MetricId::Assertiveness => "Assertividade",
        MetricId::Committed => "Comprometido",
        MetricId::Realized => "Realizado",
        MetricId::Savings => "Savings",
    };
    name.to_string()
}
