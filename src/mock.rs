//! Mock implementations for testing
//!
//! A scripted `Command` that records which hooks ran and what it saw.

use crate::command::Command;
use crate::context::Context;
use crate::domain::{ArgumentMap, OptionMap, Value};
use crate::error::{AppError, Result};
use clap::Arg;

/// Hooks invoked after parsing, in call order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calls {
    ProcessOptions,
    ProcessArguments,
    Command,
}

/// Command whose behavior is set up by the test
#[derive(Debug, Default)]
pub struct ScriptedCommand {
    exit_code: Option<i32>,
    arguments: Vec<String>,
    int_options: Vec<(String, i64)>,
    options_error: Option<String>,
    pub calls: Vec<Calls>,
    pub seen_options: OptionMap,
    pub seen_positionals: Vec<String>,
    pub saw_verbose: bool,
}

impl ScriptedCommand {
    /// A command that returns `code`
    pub fn returning(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            ..Self::default()
        }
    }

    /// A command that never overrides `command`
    pub fn unimplemented() -> Self {
        Self::default()
    }

    /// Builder: declare positional arguments
    pub fn with_arguments(mut self, names: &[&str]) -> Self {
        self.arguments = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Builder: add a `--<name> <int>` option seeded with `default`
    pub fn with_int_option(mut self, name: &str, default: i64) -> Self {
        self.int_options.push((name.to_string(), default));
        self
    }

    /// Builder: make `process_options` fail
    pub fn failing_options(mut self, message: &str) -> Self {
        self.options_error = Some(message.to_string());
        self
    }
}

impl Command for ScriptedCommand {
    fn command_options(&self) -> OptionMap {
        self.int_options
            .iter()
            .map(|(name, default)| (name.clone(), Value::Int(*default)))
            .collect()
    }

    fn command_arguments(&self) -> ArgumentMap {
        self.arguments
            .iter()
            .map(|name| (name.clone(), Value::Null))
            .collect()
    }

    fn define_options(&self, cmd: clap::Command) -> clap::Command {
        self.int_options.iter().fold(cmd, |cmd, (name, _)| {
            cmd.arg(Arg::new(name.clone()).long(name.clone()).value_name("N"))
        })
    }

    fn process_options(&mut self, ctx: &mut Context) -> Result<()> {
        self.calls.push(Calls::ProcessOptions);
        self.seen_options = ctx.options().clone();
        match &self.options_error {
            Some(message) => Err(AppError::InvalidOptions(message.clone())),
            None => Ok(()),
        }
    }

    fn process_arguments(&mut self, ctx: &mut Context) -> Result<()> {
        self.calls.push(Calls::ProcessArguments);
        self.seen_positionals = ctx.positionals().to_vec();
        ctx.bind_positionals();
        Ok(())
    }

    fn command(&mut self, ctx: &Context) -> Result<i32> {
        self.calls.push(Calls::Command);
        self.saw_verbose = ctx.is_verbose();
        self.exit_code.ok_or(AppError::Unimplemented)
    }
}
