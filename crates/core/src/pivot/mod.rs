//! Grouping, aggregation, and pivot matrix layout.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod key;
pub mod layout;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use aggregate::aggregate;
pub use config::PivotConfiguration;
pub use error::PivotError;
pub use key::GroupKey;
pub use layout::build_matrix;
pub use service::PivotService;
pub use types::{
    AggregatedCell, AggregationOutcome, CellValues, PivotMatrix, PivotReport, PivotWarning,
};
