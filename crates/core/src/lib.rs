//! Aggregation and pivot engine for Farol.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations
//! live here.
//!
//! # Modules
//!
//! - `rates` - Exchange rate tables and currency normalization
//! - `catalog` - Dimension and metric catalog
//! - `facts` - Fact records and dimension value extraction
//! - `filter` - Predicate filtering over fact collections
//! - `pivot` - Grouping, aggregation, and pivot matrix layout

pub mod catalog;
pub mod facts;
pub mod filter;
pub mod pivot;
pub mod rates;
