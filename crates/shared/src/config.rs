//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Exchange rate table configuration.
    #[serde(default)]
    pub bank: BankConfig,
    /// Command-line calculator configuration.
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// Exchange rate table configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BankConfig {
    /// Rates registered in the bank at startup.
    #[serde(default)]
    pub rates: Vec<RateEntry>,
}

/// A single configured exchange rate.
///
/// `rate` is the number of `from` units per unit of `to`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateEntry {
    /// Source currency code.
    pub from: Currency,
    /// Target currency code.
    pub to: Currency,
    /// Exchange rate.
    pub rate: Decimal,
}

/// Command-line calculator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    /// Currency results are reduced to when none is given.
    #[serde(default = "default_target_currency")]
    pub target_currency: Currency,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            target_currency: default_target_currency(),
        }
    }
}

fn default_target_currency() -> Currency {
    Currency::from(crate::types::currency::USD)
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MONETA").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from an inline TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or has the wrong shape.
    pub fn from_toml(document: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
