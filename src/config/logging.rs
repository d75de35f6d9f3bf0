//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Rust log filter directive
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Build the subscriber filter, preferring `RUST_LOG` when set
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Install the global tracing subscriber
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_tracing(&self) {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr);

        let result = if self.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };

        if let Err(e) = result {
            tracing::debug!("Tracing subscriber already installed: {}", e);
        }
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("LOGGING__LEVEL"));
        }
        if EnvFilter::try_new(&self.level).is_err() {
            return Err(ValidationError::InvalidLogFilter);
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info,ticket_service=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info,ticket_service=debug");
        assert!(!config.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_level() {
        let config = LoggingConfig {
            level: "  ".to_string(),
            json: false,
        };
        assert!(matches!(config.validate(), Err(ValidationError::MissingRequired(_))));
    }

    #[test]
    fn test_validation_invalid_filter() {
        let config = LoggingConfig {
            level: "ticket_service=notalevel".to_string(),
            json: false,
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidLogFilter)));
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{"level": "warn", "json": true}"#;
        let config: LoggingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.level, "warn");
        assert!(config.json);
    }
}
