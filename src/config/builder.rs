//! Configuration builder
//!
//! Merges configuration from files and values given in code.

use crate::cli::output::OutputFormat;
use crate::config::{ConfigFile, RunnerConfig};
use crate::domain::Value;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: RunnerConfig,
}

impl ConfigBuilder {
    /// Create a new builder for a command name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: RunnerConfig::named(name),
        }
    }

    /// Load configuration from a file, or from the default locations when
    /// no path is given
    ///
    /// A file without a command name keeps the builder's name.
    pub fn with_file(mut self, path: Option<&str>) -> Self {
        let file_config = match path {
            Some(path) => ConfigFile::load(path)
                .map_err(|e| log::warn!("Ignoring config file: {}", e))
                .ok(),
            None => ConfigFile::load_default(&self.config.runner.name),
        };

        if let Some(mut cfg) = file_config {
            if cfg.runner.name.trim().is_empty() {
                cfg.runner.name = std::mem::take(&mut self.config.runner.name);
            }
            self.config = cfg;
        }

        self
    }

    /// Override the usage string
    pub fn with_usage(mut self, usage: Option<String>) -> Self {
        if let Some(u) = usage {
            self.config.runner.usage = u;
        }
        self
    }

    /// Override the verbose dump format
    pub fn with_verbose_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(f) = format {
            self.config.runner.verbose_format = f;
        }
        self
    }

    /// Override a single option default
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.defaults.insert(name.into(), value.into());
        self
    }

    /// Build the final configuration
    pub fn build(self) -> RunnerConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::DEFAULT_USAGE;
    use std::io::Write;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new("greet").build();
        assert_eq!(config.runner.name, "greet");
        assert_eq!(config.runner.usage, DEFAULT_USAGE);
        assert!(config.defaults.is_empty());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new("greet")
            .with_usage(Some("[OPTIONS]... NAME".to_string()))
            .with_verbose_format(Some(OutputFormat::Json))
            .with_default("repeat", 4i64)
            .build();

        assert_eq!(config.runner.usage, "[OPTIONS]... NAME");
        assert_eq!(config.runner.verbose_format, OutputFormat::Json);
        assert_eq!(config.defaults["repeat"], Value::Int(4));
    }

    #[test]
    fn test_builder_none_keeps_values() {
        let config = ConfigBuilder::new("greet")
            .with_usage(None)
            .with_verbose_format(None)
            .build();
        assert_eq!(config.runner.usage, DEFAULT_USAGE);
        assert_eq!(config.runner.verbose_format, OutputFormat::Table);
    }

    #[test]
    fn test_with_file_keeps_name_when_missing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nrepeat = 2").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ConfigBuilder::new("greet").with_file(Some(&path)).build();
        assert_eq!(config.runner.name, "greet");
        assert_eq!(config.defaults["repeat"], Value::Int(2));
    }

    #[test]
    fn test_with_missing_file_is_ignored() {
        let config = ConfigBuilder::new("greet")
            .with_file(Some("/nonexistent/greet.toml"))
            .build();
        assert_eq!(config.runner.name, "greet");
    }
}
