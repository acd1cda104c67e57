//! Filter criteria and filter sets.

use serde::{Deserialize, Serialize};

use crate::catalog::DimensionId;
use crate::facts::{DimensionValue, FactRecord};

use super::error::FilterError;

/// Membership operand for an `In` criterion.
///
/// The `All` sentinel encodes "no restriction" explicitly, so every
/// dimension always has a defined selection and evaluation stays total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// No restriction; every value passes.
    All,
    /// Value must be one of these.
    Values(Vec<String>),
}

impl Selection {
    /// Returns true if the value passes the selection.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Values(values) => values.iter().any(|candidate| candidate == value),
        }
    }
}

/// One predicate over a fact dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterCriterion {
    /// Exact, case-sensitive match on a dimension's value.
    Equals {
        /// Dimension to test.
        dimension: DimensionId,
        /// Expected value.
        value: String,
    },
    /// Membership test on a dimension's value.
    In {
        /// Dimension to test.
        dimension: DimensionId,
        /// Allowed values or the `All` sentinel.
        selection: Selection,
    },
    /// Inclusive range test on an ordered dimension (month or year).
    Range {
        /// Dimension to test.
        dimension: DimensionId,
        /// Lower bound, inclusive.
        min: DimensionValue,
        /// Upper bound, inclusive.
        max: DimensionValue,
    },
    /// Case-insensitive substring search across text dimensions.
    ///
    /// A fact passes if ANY of the listed dimensions contains the
    /// needle; the criterion as a whole still ANDs with the rest of
    /// the filter set.
    Contains {
        /// Substring to search for.
        needle: String,
        /// Text dimensions to search in.
        dimensions: Vec<DimensionId>,
    },
}

impl FilterCriterion {
    /// Validates the criterion's operands.
    ///
    /// # Errors
    ///
    /// Returns a `FilterError` describing the first invalid operand.
    pub fn validate(&self) -> Result<(), FilterError> {
        match self {
            Self::Equals { .. } | Self::In { .. } => Ok(()),
            Self::Range {
                dimension,
                min,
                max,
            } => {
                match dimension {
                    DimensionId::Month | DimensionId::Year => {}
                    _ => return Err(FilterError::NonComparableDimension(*dimension)),
                }
                let bounds_match = match dimension {
                    DimensionId::Month => {
                        matches!(min, DimensionValue::Month(_))
                            && matches!(max, DimensionValue::Month(_))
                    }
                    _ => {
                        matches!(min, DimensionValue::Year(_))
                            && matches!(max, DimensionValue::Year(_))
                    }
                };
                if !bounds_match {
                    return Err(FilterError::OperandMismatch(*dimension));
                }
                if min > max {
                    return Err(FilterError::InvalidRange {
                        min: min.clone(),
                        max: max.clone(),
                    });
                }
                Ok(())
            }
            Self::Contains { dimensions, .. } => {
                if dimensions.is_empty() {
                    return Err(FilterError::EmptySearchScope);
                }
                Ok(())
            }
        }
    }

    /// Evaluates the criterion against one fact.
    ///
    /// Evaluation is total: operands that cannot apply to the fact's
    /// value simply do not match.
    #[must_use]
    pub fn matches(&self, fact: &FactRecord) -> bool {
        match self {
            Self::Equals { dimension, value } => {
                fact.dimension_value(*dimension).to_string() == *value
            }
            Self::In {
                dimension,
                selection,
            } => selection.matches(&fact.dimension_value(*dimension).to_string()),
            Self::Range {
                dimension,
                min,
                max,
            } => {
                let value = fact.dimension_value(*dimension);
                *min <= value && value <= *max
            }
            Self::Contains {
                needle,
                dimensions,
            } => {
                if needle.is_empty() {
                    return true;
                }
                let needle = needle.to_lowercase();
                dimensions.iter().any(|dimension| {
                    fact.dimension_value(*dimension)
                        .to_string()
                        .to_lowercase()
                        .contains(&needle)
                })
            }
        }
    }
}

/// A conjunction of filter criteria.
///
/// A fact is retained only if every criterion passes; OR semantics are
/// expressed through `In` operand lists or `Contains` search scopes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    /// The criteria, all of which must pass.
    pub criteria: Vec<FilterCriterion>,
}

impl FilterSet {
    /// Creates an empty filter set (matches everything).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style criterion addition.
    #[must_use]
    pub fn with(mut self, criterion: FilterCriterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Returns true if the set has no criteria.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Validates every criterion, failing fast on the first error.
    ///
    /// # Errors
    ///
    /// Returns the first `FilterError` found.
    pub fn validate(&self) -> Result<(), FilterError> {
        self.criteria.iter().try_for_each(FilterCriterion::validate)
    }

    /// Returns true if the fact passes all criteria.
    #[must_use]
    pub fn matches(&self, fact: &FactRecord) -> bool {
        self.criteria.iter().all(|criterion| criterion.matches(fact))
    }
}
