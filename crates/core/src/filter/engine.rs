//! Filter application.

use tracing::debug;

use crate::facts::FactRecord;

use super::criteria::FilterSet;
use super::error::FilterError;

/// Applies a filter set to a fact collection.
///
/// Runs in O(n * k) for n facts and k criteria. The input is never
/// mutated; the result is a new (possibly empty) collection.
///
/// # Errors
///
/// Returns a `FilterError` if the set fails validation; no facts are
/// evaluated in that case.
pub fn apply_filters(facts: &[FactRecord], filters: &FilterSet) -> Result<Vec<FactRecord>, FilterError> {
    filters.validate()?;

    let retained: Vec<FactRecord> = facts
        .iter()
        .filter(|fact| filters.matches(fact))
        .cloned()
        .collect();

    debug!(
        input = facts.len(),
        retained = retained.len(),
        criteria = filters.criteria.len(),
        "applied filter set"
    );

    Ok(retained)
}
