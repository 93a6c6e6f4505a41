//! Output formatting utilities
//!
//! Help text and the verbose dump of parsed options and arguments.

use crate::cli::parser::OptionParser;
use crate::context::Context;
use crate::domain::{ArgumentMap, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Format of the verbose dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `name = value` lines
    #[default]
    Table,
    /// One pretty-printed JSON object
    Json,
}

/// Format and print output based on the selected format
pub fn print_output<W, T>(out: &mut W, data: &T, format: OutputFormat) -> io::Result<()>
where
    W: Write,
    T: Serialize + TableDisplay,
{
    match format {
        OutputFormat::Table => {
            write!(out, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(out, "{}", json)?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;
}

/// Every option and argument of a run, in display order
#[derive(Debug, Clone, Serialize)]
pub struct VerboseDump {
    pub options: IndexMap<String, Value>,
    pub arguments: ArgumentMap,
    #[serde(skip)]
    command_option_count: usize,
}

impl VerboseDump {
    /// Collect default options, then command options, then arguments
    pub fn from_context(ctx: &Context) -> Self {
        let mut options: IndexMap<String, Value> = ctx
            .defaults()
            .entries()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        for (name, value) in ctx.options() {
            options.insert(name.clone(), value.clone());
        }

        Self {
            options,
            arguments: ctx.arguments().clone(),
            command_option_count: ctx.options().len(),
        }
    }
}

impl TableDisplay for VerboseDump {
    fn to_table(&self) -> String {
        let mut output = String::from("OPTIONS:\n");
        for (name, value) in &self.options {
            output.push_str(&format!("{} = {}\n", name, value));
        }
        if self.command_option_count == 0 {
            output.push_str("No options\n");
        }

        output.push_str("ARGUMENTS:\n");
        for (name, value) in &self.arguments {
            output.push_str(&format!("{} = {}\n", name, value));
        }
        if self.arguments.is_empty() {
            output.push_str("No arguments\n");
        }

        output
    }
}

/// Print the parser's help text; in verbose mode also the exit code.
/// Returns `exit_code` unchanged.
pub fn output_help<W: Write>(
    out: &mut W,
    parser: &OptionParser,
    exit_code: i32,
    verbose: bool,
) -> io::Result<i32> {
    let help = parser.render_help();
    write!(out, "{}", help)?;
    if !help.ends_with('\n') {
        writeln!(out)?;
    }
    if verbose {
        writeln!(out, "{}", exit_code)?;
    }
    Ok(exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::DEFAULT_USAGE;
    use crate::domain::OptionMap;

    fn sample_context() -> Context {
        let options = OptionMap::from([("repeat".to_string(), Value::Int(2))]);
        let arguments = ArgumentMap::from([("name".to_string(), Value::from("alice"))]);
        let mut ctx = Context::new("greet", options, arguments);
        ctx.defaults_mut().verbose = true;
        ctx
    }

    #[test]
    fn test_table_dump() {
        let dump = VerboseDump::from_context(&sample_context());
        assert_eq!(
            dump.to_table(),
            "OPTIONS:\nhelp = false\nverbose = true\nrepeat = 2\nARGUMENTS:\nname = alice\n"
        );
    }

    #[test]
    fn test_table_dump_placeholders() {
        let ctx = Context::new("app", OptionMap::new(), ArgumentMap::new());
        let table = VerboseDump::from_context(&ctx).to_table();
        assert!(table.contains("help = false\nverbose = false\nNo options\n"));
        assert!(table.ends_with("ARGUMENTS:\nNo arguments\n"));
    }

    #[test]
    fn test_json_dump() {
        let dump = VerboseDump::from_context(&sample_context());
        let mut out = Vec::new();
        print_output(&mut out, &dump, OutputFormat::Json).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["options"]["verbose"], true);
        assert_eq!(json["options"]["repeat"], 2);
        assert_eq!(json["arguments"]["name"], "alice");
    }

    #[test]
    fn test_output_help_returns_code() {
        let parser = OptionParser::new("app", DEFAULT_USAGE);
        let mut out = Vec::new();
        let code = output_help(&mut out, &parser, 1, false).unwrap();
        assert_eq!(code, 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Usage: app [OPTIONS]... [ARGUMENTS]..."));
        assert!(!text.trim_end().ends_with('1'));
    }

    #[test]
    fn test_output_help_verbose_prints_code() {
        let parser = OptionParser::new("app", DEFAULT_USAGE);
        let mut out = Vec::new();
        output_help(&mut out, &parser, 1, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("\n1\n"));
    }
}
