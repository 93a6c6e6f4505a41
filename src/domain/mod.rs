//! Domain models for runcli
//!
//! Values and the option/argument collections a run works on.

pub mod options;
pub mod value;

pub use options::{ArgumentMap, DefaultOptions, OptionMap};
pub use value::Value;
