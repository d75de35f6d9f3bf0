//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TICKET_SERVICE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ticket_service::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Purchase limit is {}", config.purchase.max_tickets_per_purchase);
//! ```

mod error;
mod logging;
mod purchase;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use purchase::PurchaseConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Purchase rules (ticket limit)
    #[serde(default)]
    pub purchase: PurchaseConfig,

    /// Logging (filter directive, output format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TICKET_SERVICE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TICKET_SERVICE__PURCHASE__MAX_TICKETS_PER_PURCHASE=20`
    /// - `TICKET_SERVICE__LOGGING__LEVEL=debug`
    /// - `TICKET_SERVICE__LOGGING__JSON=true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TICKET_SERVICE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.purchase.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
