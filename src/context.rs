//! Run context
//!
//! Everything a single run knows: default flags, command options, declared
//! arguments and the positional tokens left over after option parsing.
//! Hooks receive it by reference instead of mutating runner fields.

use crate::domain::{ArgumentMap, DefaultOptions, OptionMap, Value};
use clap::ArgMatches;

/// Mutable state threaded through the pipeline stages
#[derive(Debug, Clone)]
pub struct Context {
    command_name: String,
    defaults: DefaultOptions,
    options: OptionMap,
    arguments: ArgumentMap,
    positionals: Vec<String>,
    matches: Option<ArgMatches>,
}

impl Context {
    /// Create a context from seeded options and arguments
    pub fn new(
        command_name: impl Into<String>,
        options: OptionMap,
        arguments: ArgumentMap,
    ) -> Self {
        Self {
            command_name: command_name.into(),
            defaults: DefaultOptions::default(),
            options,
            arguments,
            positionals: Vec::new(),
            matches: None,
        }
    }

    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    pub fn defaults(&self) -> DefaultOptions {
        self.defaults
    }

    pub(crate) fn defaults_mut(&mut self) -> &mut DefaultOptions {
        &mut self.defaults
    }

    /// Check if running in verbose mode
    pub fn is_verbose(&self) -> bool {
        self.defaults.verbose
    }

    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut OptionMap {
        &mut self.options
    }

    /// Look up a command option by name
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// Set (or add) a command option
    pub fn set_option(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.options.insert(name.into(), value.into());
    }

    pub fn arguments(&self) -> &ArgumentMap {
        &self.arguments
    }

    pub fn arguments_mut(&mut self) -> &mut ArgumentMap {
        &mut self.arguments
    }

    /// Look up a declared argument by name
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    /// Set (or add) an argument value
    pub fn set_argument(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.arguments.insert(name.into(), value.into());
    }

    /// Tokens left after option parsing, in invocation order
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    pub(crate) fn set_positionals(&mut self, positionals: Vec<String>) {
        self.positionals = positionals;
    }

    /// Raw clap matches from the last successful parse
    ///
    /// Useful in `process_options` for option kinds the seeded `Value`
    /// cannot express (counts, typed value parsers...).
    pub fn matches(&self) -> Option<&ArgMatches> {
        self.matches.as_ref()
    }

    pub(crate) fn set_matches(&mut self, matches: ArgMatches) {
        self.matches = Some(matches);
    }

    /// True when no arguments are declared or exactly as many positional
    /// tokens remain as arguments are declared
    pub fn arguments_valid(&self) -> bool {
        self.arguments.is_empty() || self.positionals.len() == self.arguments.len()
    }

    /// Assign positional tokens to declared argument names, in order
    pub fn bind_positionals(&mut self) {
        for (value, token) in self.arguments.values_mut().zip(&self.positionals) {
            *value = Value::Str(token.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared(names: &[&str]) -> ArgumentMap {
        names
            .iter()
            .map(|n| (n.to_string(), Value::Null))
            .collect()
    }

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_declared_arguments_always_valid() {
        let mut ctx = Context::new("app", OptionMap::new(), ArgumentMap::new());
        assert!(ctx.arguments_valid());
        ctx.set_positionals(tokens(&["a", "b", "c"]));
        assert!(ctx.arguments_valid());
    }

    #[test]
    fn test_declared_arguments_need_exact_count() {
        let mut ctx = Context::new("app", OptionMap::new(), declared(&["src", "dst"]));
        assert!(!ctx.arguments_valid());

        ctx.set_positionals(tokens(&["a"]));
        assert!(!ctx.arguments_valid());

        ctx.set_positionals(tokens(&["a", "b"]));
        assert!(ctx.arguments_valid());

        ctx.set_positionals(tokens(&["a", "b", "c"]));
        assert!(!ctx.arguments_valid());
    }

    #[test]
    fn test_bind_positionals() {
        let mut ctx = Context::new("app", OptionMap::new(), declared(&["src", "dst"]));
        ctx.set_positionals(tokens(&["in.txt", "out.txt"]));
        ctx.bind_positionals();

        assert_eq!(ctx.argument("src"), Some(&Value::from("in.txt")));
        assert_eq!(ctx.argument("dst"), Some(&Value::from("out.txt")));
    }

    #[test]
    fn test_set_option() {
        let mut ctx = Context::new("app", OptionMap::new(), ArgumentMap::new());
        ctx.set_option("level", 3i64);
        assert_eq!(ctx.option("level").and_then(Value::as_int), Some(3));
        assert!(ctx.option("missing").is_none());
    }
}
