//! Option parsing and output formatting
//!
//! Uses clap's builder API, since options are registered at runtime by
//! the application.

pub mod output;
pub mod parser;

pub use output::{OutputFormat, VerboseDump};
pub use parser::{OptionParser, ParseOutcome, Parsed, DEFAULT_USAGE};
