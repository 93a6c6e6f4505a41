//! Option and argument collections
//!
//! Default options are fixed; command options and arguments are
//! insertion-ordered maps seeded by the consumer.

use crate::domain::Value;
use indexmap::IndexMap;
use serde::Serialize;

/// Options every runner understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DefaultOptions {
    /// `-h` / `--help` was given
    pub help: bool,
    /// `-V` / `--verbose` was given
    pub verbose: bool,
}

impl DefaultOptions {
    /// Name/value pairs in display order
    pub fn entries(&self) -> [(&'static str, Value); 2] {
        [
            ("help", Value::Bool(self.help)),
            ("verbose", Value::Bool(self.verbose)),
        ]
    }
}

/// Command-specific options, keyed by the clap argument id
pub type OptionMap = IndexMap<String, Value>;

/// Declared positional arguments, in the order they are expected
pub type ArgumentMap = IndexMap<String, Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_off() {
        let defaults = DefaultOptions::default();
        assert!(!defaults.help);
        assert!(!defaults.verbose);
    }

    #[test]
    fn test_entries_order() {
        let defaults = DefaultOptions {
            help: false,
            verbose: true,
        };
        let names: Vec<_> = defaults.entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["help", "verbose"]);
        assert_eq!(defaults.entries()[1].1, Value::Bool(true));
    }

    #[test]
    fn test_argument_map_keeps_declaration_order() {
        let args = ArgumentMap::from([
            ("source".to_string(), Value::Null),
            ("dest".to_string(), Value::Null),
            ("mode".to_string(), Value::Null),
        ]);
        let names: Vec<_> = args.keys().map(String::as_str).collect();
        assert_eq!(names, ["source", "dest", "mode"]);
    }
}
