//! Unified error types for runcli
//!
//! This module defines all error types used throughout the crate.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level error type returned by hooks and the runner
#[derive(Error, Debug)]
pub enum AppError {
    /// The consumer never overrode `Command::command`
    #[error("Command::command must be implemented by the application")]
    Unimplemented,

    /// Post-parse option validation rejected the options
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Post-parse argument processing rejected the arguments
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A command option reuses the id of a built-in flag
    #[error("Option name '{0}' is reserved for the built-in flag")]
    ReservedOption(String),

    /// Failure raised by application logic
    #[error("Command failed: {0}")]
    Command(String),

    /// Error from configuration loading
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (console output, files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for errors that mean the application was wired up wrong,
    /// as opposed to bad user input.
    pub fn is_programmer_error(&self) -> bool {
        matches!(self, AppError::Unimplemented | AppError::ReservedOption(_))
    }
}

/// Errors from turning an invocation into options
///
/// These never escape `Runner::run`; they are reported as help output
/// with exit code 1.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Rejected by clap (unknown flag, missing value, invalid value...)
    #[error("{0}")]
    Clap(#[from] clap::Error),

    /// A command-line value could not be coerced to the seeded type
    #[error("Invalid value '{value}' for option '{option}' (expected {expected})")]
    Coercion {
        option: String,
        value: String,
        expected: &'static str,
    },
}

impl ParseError {
    /// One-line description for logs
    ///
    /// clap's own rendering spans several lines and repeats the usage.
    pub fn summary(&self) -> String {
        match self {
            ParseError::Clap(e) => e.kind().to_string(),
            other => other.to_string(),
        }
    }
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
