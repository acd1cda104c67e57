//! Fact records and dimension value extraction.

pub mod record;
pub mod value;

pub use record::FactRecord;
pub use value::DimensionValue;
