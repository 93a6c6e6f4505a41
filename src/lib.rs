//! runcli - a convention for building command-line applications
//!
//! Implement [`Command`] for your application and hand it to a [`Runner`]
//! together with the invocation. The runner parses options, checks the
//! argument count, calls your hooks and prints help on failure.
//!
//! ```no_run
//! use runcli::{Command, Context, Runner, DEFAULT_USAGE};
//!
//! struct Hello;
//!
//! impl Command for Hello {
//!     fn command(&mut self, _ctx: &Context) -> runcli::Result<i32> {
//!         println!("Hello World");
//!         Ok(0)
//!     }
//! }
//!
//! let result = Runner::new(Hello, std::env::args_os().skip(1), "hello", DEFAULT_USAGE)
//!     .and_then(|mut runner| runner.run());
//! std::process::exit(result.unwrap_or(1));
//! ```
//!
//! # Modules
//!
//! - [`cli`]: Option parser and output formatting
//! - [`command`]: The `Command` trait
//! - [`config`]: Configuration system
//! - [`context`]: Per-run state handed to hooks
//! - [`domain`]: Values and option/argument collections
//! - [`error`]: Error types
//! - [`runner`]: The run pipeline

pub mod cli;
pub mod command;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod runner;

#[cfg(test)]
pub mod mock;

pub use cli::DEFAULT_USAGE;
pub use command::Command;
pub use context::Context;
pub use domain::{ArgumentMap, OptionMap, Value};
pub use error::{AppError, Result};
pub use runner::Runner;
