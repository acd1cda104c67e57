//! Exchange rate tables and currency normalization.

pub mod error;
pub mod normalize;
pub mod table;

#[cfg(test)]
mod props;

pub use error::RateError;
pub use normalize::{normalize, Normalized, RateWarning};
pub use table::RateTable;
