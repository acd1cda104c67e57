//! Predicate filtering over fact collections.

pub mod criteria;
pub mod engine;
pub mod error;

#[cfg(test)]
mod props;

pub use criteria::{FilterCriterion, FilterSet, Selection};
pub use engine::apply_filters;
pub use error::FilterError;
