//! The command runner
//!
//! Composes the [`Command`] hooks into one fixed pipeline:
//!
//! 1. parse options (help request stops here with code 0)
//! 2. check the positional argument count
//! 3. `process_options`, `process_arguments`
//! 4. verbose dump when `-V` was given, then `command`
//!
//! Any failure in steps 1-3 prints help and yields exit code 1.

use crate::cli::output::{output_help, print_output, VerboseDump};
use crate::cli::parser::{OptionParser, ParseOutcome, DEFAULT_USAGE, HELP_ID, VERBOSE_ID};
use crate::command::Command;
use crate::config::RunnerConfig;
use crate::context::Context;
use crate::error::{AppError, Result};
use std::ffi::OsString;
use std::io::{self, Write};

/// Runs a [`Command`] against an invocation
pub struct Runner<C: Command> {
    command: C,
    invocation: Vec<OsString>,
    config: RunnerConfig,
    context: Context,
}

impl<C: Command> Runner<C> {
    /// Create a runner; seeds options and arguments from the command
    ///
    /// `invocation` excludes the program name. Fails when `name` is empty
    /// or a command option reuses a built-in flag id.
    pub fn new<I, S>(command: C, invocation: I, name: &str, usage: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut config = RunnerConfig::named(name);
        config.runner.usage = usage.to_string();
        Self::build(command, invocation, config)
    }

    /// Create a runner with the default usage string
    pub fn with_default_usage<I, S>(command: C, invocation: I, name: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self::new(command, invocation, name, DEFAULT_USAGE)
    }

    /// Create a runner from a configuration
    ///
    /// Option defaults in the configuration replace seeded values.
    pub fn with_config<I, S>(command: C, invocation: I, config: RunnerConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self::build(command, invocation, config)
    }

    fn build<I, S>(command: C, invocation: I, config: RunnerConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        config.validate()?;

        let options = command.command_options();
        if let Some(name) = options.keys().find(|name| is_reserved(name)) {
            return Err(AppError::ReservedOption(name.clone()));
        }

        let mut context = Context::new(
            config.runner.name.clone(),
            options,
            command.command_arguments(),
        );
        apply_config_defaults(&config, &mut context);

        Ok(Self {
            command,
            invocation: invocation.into_iter().map(Into::into).collect(),
            config,
            context,
        })
    }

    /// State of the run so far
    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn command(&self) -> &C {
        &self.command
    }

    pub fn into_command(self) -> C {
        self.command
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Build a fresh parser with the command's options registered
    pub fn parser(&self) -> OptionParser {
        OptionParser::new(&self.config.runner.name, &self.config.runner.usage)
            .define(|cmd| self.command.define_options(cmd))
    }

    /// Run the pipeline, writing to stdout
    ///
    /// Returns the exit code. `Err` means the application itself is broken
    /// (e.g. `command` not implemented) or `command` failed.
    pub fn run(&mut self) -> Result<i32> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.run_with_output(&mut handle)
    }

    /// Run the pipeline, writing to `out`
    pub fn run_with_output<W: Write>(&mut self, out: &mut W) -> Result<i32> {
        let parser = self.parser();

        log::debug!(
            "Parsing {} token(s) for {}",
            self.invocation.len(),
            self.config.runner.name
        );
        let parsed = match parser.parse(&self.invocation) {
            ParseOutcome::Parsed(parsed) => parsed,
            ParseOutcome::Help { verbose } => {
                let defaults = self.context.defaults_mut();
                defaults.help = true;
                defaults.verbose = verbose;
                return self.help(out, &parser, 0);
            }
            ParseOutcome::Failed { error, verbose } => {
                log::warn!("Option parsing failed: {}", error.summary());
                log::debug!("{}", error);
                self.context.defaults_mut().verbose = verbose;
                return self.help(out, &parser, 1);
            }
        };

        self.context.defaults_mut().verbose = parsed.verbose;
        if let Err(e) = parsed.apply_to(self.context.options_mut()) {
            log::warn!("Option parsing failed: {}", e.summary());
            return self.help(out, &parser, 1);
        }
        self.context.set_positionals(parsed.positionals);
        self.context.set_matches(parsed.matches);

        if !self.context.arguments_valid() {
            log::warn!(
                "Expected {} argument(s), got {}",
                self.context.arguments().len(),
                self.context.positionals().len()
            );
            return self.help(out, &parser, 1);
        }

        log::debug!("Processing options and arguments");
        let processed = self
            .command
            .process_options(&mut self.context)
            .and_then(|()| self.command.process_arguments(&mut self.context));
        if let Err(e) = processed {
            if e.is_programmer_error() {
                return Err(e);
            }
            log::warn!("{}", e);
            writeln!(out, "{}", e)?;
            return self.help(out, &parser, 1);
        }

        if self.context.is_verbose() {
            let dump = VerboseDump::from_context(&self.context);
            print_output(out, &dump, self.config.runner.verbose_format)?;
        }

        log::debug!("Running command {}", self.config.runner.name);
        let code = self.command.command(&self.context)?;
        log::debug!("Command {} exited with {}", self.config.runner.name, code);
        Ok(code)
    }

    fn help<W: Write>(&self, out: &mut W, parser: &OptionParser, exit_code: i32) -> Result<i32> {
        Ok(output_help(out, parser, exit_code, self.context.is_verbose())?)
    }
}

/// Command options may not shadow the built-in flags
fn is_reserved(name: &str) -> bool {
    name == HELP_ID || name == VERBOSE_ID
}

/// Replace seeded option values with configured defaults
///
/// Configured values are coerced to the seeded variant; names the command
/// never seeded are ignored.
fn apply_config_defaults(config: &RunnerConfig, context: &mut Context) {
    for (name, configured) in &config.defaults {
        let Some(seeded) = context.options_mut().get_mut(name) else {
            log::warn!("Ignoring default for unknown option '{}'", name);
            continue;
        };

        let same_variant = std::mem::discriminant(&*seeded) == std::mem::discriminant(configured);
        if same_variant || seeded.is_null() {
            *seeded = configured.clone();
            continue;
        }

        match seeded.coerce(name, &[configured.to_string()]) {
            Ok(value) => *seeded = value,
            Err(e) => log::warn!("Ignoring configured default: {}", e),
        }
    }
}
