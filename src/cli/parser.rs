//! Option parser built on clap's builder API
//!
//! The parser is assembled at runtime: the banner and the two built-in
//! flags come first, then whatever the application registers, then a
//! hidden catch-all positional that collects the residual tokens.

use crate::domain::OptionMap;
use crate::error::ParseError;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::ffi::OsString;
use std::io::Write;

/// Usage string used when the application does not supply one
pub const DEFAULT_USAGE: &str = "[OPTIONS]... [ARGUMENTS]...";

/// Argument id of the help flag
pub const HELP_ID: &str = "help";

/// Argument id of the verbose flag
pub const VERBOSE_ID: &str = "verbose";

const RESIDUAL_ID: &str = "__residual";

const HELP_TEMPLATE: &str =
    "{before-help}{usage-heading} {usage}\n\nSpecific options:\n{options}{after-help}";

/// Result of parsing an invocation
#[derive(Debug)]
pub enum ParseOutcome {
    /// Options parsed; the pipeline continues
    Parsed(Parsed),
    /// `-h`/`--help` was requested; print help and stop with code 0
    Help { verbose: bool },
    /// The invocation was rejected
    Failed { error: ParseError, verbose: bool },
}

/// A successful parse
#[derive(Debug)]
pub struct Parsed {
    /// `-V`/`--verbose` was given
    pub verbose: bool,
    /// Tokens not consumed as options, in order
    pub positionals: Vec<String>,
    /// Full clap matches
    pub matches: ArgMatches,
}

impl Parsed {
    /// Overwrite seeded option values with those given on the command line
    /// or through the environment.
    ///
    /// Options whose name is not a registered argument id, or that were
    /// left at their default, keep the seeded value. Each value is coerced
    /// to the variant it was seeded with.
    pub fn apply_to(&self, options: &mut OptionMap) -> Result<(), ParseError> {
        for (name, value) in options.iter_mut() {
            let raw = match self.matches.try_get_raw(name) {
                Ok(Some(raw)) => raw,
                _ => continue,
            };
            if !matches!(
                self.matches.value_source(name),
                Some(ValueSource::CommandLine | ValueSource::EnvVariable)
            ) {
                continue;
            }

            let raw: Vec<String> = raw.map(|v| v.to_string_lossy().into_owned()).collect();
            *value = value.coerce(name, &raw)?;
            log::debug!("Option {} = {}", name, value);
        }
        Ok(())
    }
}

/// Parser wrapping the configured option definitions and banner
#[derive(Debug, Clone)]
pub struct OptionParser {
    command: Command,
}

impl OptionParser {
    /// Create a parser with the `Usage: <name> <usage>` banner and the
    /// built-in `-h/--help` and `-V/--verbose` flags
    ///
    /// Repeating an option is allowed; the last occurrence wins.
    pub fn new(name: &str, usage: &str) -> Self {
        let command = Command::new(name.to_string())
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .args_override_self(true)
            .override_usage(format!("{} {}", name, usage))
            .help_template(HELP_TEMPLATE)
            .arg(
                Arg::new(HELP_ID)
                    .short('h')
                    .long("help")
                    .help("displays help information")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new(VERBOSE_ID)
                    .short('V')
                    .long("verbose")
                    .help("Run verbosely")
                    .action(ArgAction::SetTrue),
            );

        Self { command }
    }

    /// Let the application register its own options
    pub fn define<F>(mut self, define: F) -> Self
    where
        F: FnOnce(Command) -> Command,
    {
        self.command = define(self.command);
        self
    }

    /// The underlying clap command
    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Parse an invocation (without the program name)
    ///
    /// Never panics or exits; every clap error becomes
    /// `ParseOutcome::Failed`. A help flag before any `--` wins over other
    /// errors in the same invocation. Tokens that are not valid UTF-8 are
    /// rejected as a parse failure.
    pub fn parse(&self, invocation: &[OsString]) -> ParseOutcome {
        let mut command = self.command.clone().arg(
            Arg::new(RESIDUAL_ID)
                .num_args(0..)
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(String))
                .allow_negative_numbers(true)
                .hide(true),
        );

        match command.try_get_matches_from_mut(invocation) {
            Ok(matches) => {
                if matches.get_flag(HELP_ID) {
                    return ParseOutcome::Help {
                        verbose: matches.get_flag(VERBOSE_ID),
                    };
                }
                let positionals = matches
                    .get_many::<String>(RESIDUAL_ID)
                    .map(|values| values.cloned().collect())
                    .unwrap_or_default();

                ParseOutcome::Parsed(Parsed {
                    verbose: matches.get_flag(VERBOSE_ID),
                    positionals,
                    matches,
                })
            }
            Err(e) => {
                let verbose = flag_present(invocation, 'V', "--verbose");
                if flag_present(invocation, 'h', "--help") {
                    ParseOutcome::Help { verbose }
                } else {
                    ParseOutcome::Failed {
                        error: ParseError::Clap(e),
                        verbose,
                    }
                }
            }
        }
    }

    /// Generated usage/help text
    pub fn render_help(&self) -> String {
        self.command.clone().render_help().to_string()
    }

    /// Write a shell completion script for this parser
    pub fn write_completions<W: Write>(&self, shell: Shell, out: &mut W) {
        let mut command = self.command.clone();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, out);
    }
}

/// True if the flag appears before any `--` terminator, either as its long
/// form or inside a short cluster such as `-hV`.
/// Only consulted when clap rejected the invocation.
fn flag_present(invocation: &[OsString], short: char, long: &str) -> bool {
    invocation
        .iter()
        .filter_map(|token| token.to_str())
        .take_while(|token| *token != "--")
        .any(|token| match token.strip_prefix('-') {
            Some(cluster) if !cluster.starts_with('-') => cluster.contains(short),
            _ => token == long,
        })
}
