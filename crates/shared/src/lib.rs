//! Shared types, errors, and configuration for Farol.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision
//! - Currency codes and fiscal period types
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{AppError, AppResult};
