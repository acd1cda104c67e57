//! Engine configuration management.

use serde::Deserialize;

use crate::error::AppResult;

/// Engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
    /// Exchange rate configuration.
    #[serde(default)]
    pub rates: RatesConfig,
}

/// Reporting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Default target currency code for report output.
    #[serde(default = "default_target_currency")]
    pub target_currency: String,
    /// Dimensions searched by the free-text filter.
    #[serde(default = "default_search_dimensions")]
    pub search_dimensions: Vec<String>,
}

fn default_target_currency() -> String {
    "BRL".to_string()
}

fn default_search_dimensions() -> Vec<String> {
    vec![
        "project".to_string(),
        "responsible".to_string(),
        "category".to_string(),
    ]
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            target_currency: default_target_currency(),
            search_dimensions: default_search_dimensions(),
        }
    }
}

/// Exchange rate configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// When true, a currency missing within a known year is an error
    /// instead of a rate-1 fallback with a warning.
    #[serde(default)]
    pub strict: bool,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self { strict: false }
    }
}

impl EngineConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        // Pick up a local .env before reading the environment source.
        let _ = dotenvy::dotenv();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FAROL").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reporting: ReportingConfig::default(),
            rates: RatesConfig::default(),
        }
    }
}
