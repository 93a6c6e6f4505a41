//! The `Command` trait
//!
//! The six extension points an application implements. Every hook has a
//! default; the default `command` reports that the application never
//! implemented it.

use crate::context::Context;
use crate::domain::{ArgumentMap, OptionMap};
use crate::error::{AppError, Result};

/// Application hooks driven by [`Runner`](crate::runner::Runner)
///
/// Call order during `run()`:
///
/// 1. `command_options`, `command_arguments` (at construction)
/// 2. `define_options` (while building the parser)
/// 3. `process_options`, then `process_arguments`
/// 4. `command`
pub trait Command {
    /// Defaults for command-specific options
    ///
    /// Keys double as clap argument ids: an option registered in
    /// `define_options` under the same id has its command-line value
    /// copied here, coerced to the seeded variant. `help` and `verbose`
    /// belong to the built-in flags; seeding either makes the runner
    /// constructor fail with `AppError::ReservedOption`.
    fn command_options(&self) -> OptionMap {
        OptionMap::new()
    }

    /// Declared positional arguments
    ///
    /// When non-empty, exactly this many positional tokens must remain
    /// after option parsing.
    fn command_arguments(&self) -> ArgumentMap {
        ArgumentMap::new()
    }

    /// Register command-specific options on the parser
    fn define_options(&self, cmd: clap::Command) -> clap::Command {
        cmd
    }

    /// Post-parse option processing, e.g. mutually exclusive options
    ///
    /// An error sends the run down the help path with exit code 1.
    fn process_options(&mut self, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    /// Post-parse argument processing, e.g. populating argument values
    ///
    /// An error sends the run down the help path with exit code 1.
    fn process_arguments(&mut self, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    /// Application logic; the returned value is the exit code
    fn command(&mut self, _ctx: &Context) -> Result<i32> {
        Err(AppError::Unimplemented)
    }
}

impl<C: Command + ?Sized> Command for Box<C> {
    fn command_options(&self) -> OptionMap {
        (**self).command_options()
    }

    fn command_arguments(&self) -> ArgumentMap {
        (**self).command_arguments()
    }

    fn define_options(&self, cmd: clap::Command) -> clap::Command {
        (**self).define_options(cmd)
    }

    fn process_options(&mut self, ctx: &mut Context) -> Result<()> {
        (**self).process_options(ctx)
    }

    fn process_arguments(&mut self, ctx: &mut Context) -> Result<()> {
        (**self).process_arguments(ctx)
    }

    fn command(&mut self, ctx: &Context) -> Result<i32> {
        (**self).command(ctx)
    }
}
