//! Configuration system
//!
//! Handles TOML config file parsing and merging with values supplied in
//! code.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::cli::output::OutputFormat;
use crate::cli::parser::DEFAULT_USAGE;
use crate::domain::OptionMap;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// How the runner presents itself
    pub runner: RunnerSection,
    /// Overrides for seeded command option defaults
    pub defaults: OptionMap,
}

/// Runner settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerSection {
    /// Command name shown in the usage banner
    pub name: String,
    /// Usage string shown after the command name
    pub usage: String,
    /// Format of the verbose dump
    pub verbose_format: OutputFormat,
}

impl Default for RunnerSection {
    fn default() -> Self {
        Self {
            name: String::new(),
            usage: DEFAULT_USAGE.to_string(),
            verbose_format: OutputFormat::Table,
        }
    }
}

impl RunnerConfig {
    /// Configuration for a named command with every other setting at its
    /// default
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            runner: RunnerSection {
                name: name.into(),
                ..RunnerSection::default()
            },
            defaults: OptionMap::new(),
        }
    }

    /// Check that the configuration can drive a runner
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runner.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "runner.name".to_string(),
                message: "command name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Value;

    #[test]
    fn test_default_config() {
        let config = RunnerConfig::default();
        assert_eq!(config.runner.usage, DEFAULT_USAGE);
        assert_eq!(config.runner.verbose_format, OutputFormat::Table);
        assert!(config.defaults.is_empty());
    }

    #[test]
    fn test_validate_requires_name() {
        assert!(matches!(
            RunnerConfig::default().validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(RunnerConfig::named("greet").validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config: RunnerConfig = toml::from_str(
            r#"
            [runner]
            name = "greet"
            verbose_format = "json"

            [defaults]
            repeat = 3
            greeting = "Hi"
            "#,
        )
        .unwrap();

        assert_eq!(config.runner.name, "greet");
        assert_eq!(config.runner.usage, DEFAULT_USAGE);
        assert_eq!(config.runner.verbose_format, OutputFormat::Json);
        assert_eq!(config.defaults["repeat"], Value::Int(3));
        assert_eq!(config.defaults["greeting"], Value::from("Hi"));
    }
}
