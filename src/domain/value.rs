//! Option and argument values
//!
//! A small dynamic value type. The variant a consumer seeds an option with
//! decides how command-line text for that option is coerced.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed or default option/argument value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value yet; coerces to a string (or list of strings)
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    /// Human-readable name of the variant, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "a string",
            Value::Bool(_) => "a boolean",
            Value::Int(_) => "an integer",
            Value::Float(_) => "a number",
            Value::Str(_) => "a string",
            Value::List(_) => "a list",
        }
    }

    /// Build a new value of the same variant as `self` from raw
    /// command-line text.
    ///
    /// Scalars take the last occurrence, lists take every occurrence and
    /// coerce each element like the first seeded element.
    ///
    /// # Errors
    /// Returns `ParseError::Coercion` if the text does not fit the variant.
    pub fn coerce(&self, option: &str, raw: &[String]) -> Result<Value, ParseError> {
        let fail = |value: &str, expected: &'static str| ParseError::Coercion {
            option: option.to_string(),
            value: value.to_string(),
            expected,
        };

        if let Value::List(seed) = self {
            let element = seed.first().cloned().unwrap_or_default();
            let items = raw
                .iter()
                .map(|r| element.coerce(option, std::slice::from_ref(r)))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Value::List(items));
        }

        let Some(last) = raw.last() else {
            return Ok(self.clone());
        };

        match self {
            Value::Null if raw.len() > 1 => {
                Ok(Value::List(raw.iter().cloned().map(Value::Str).collect()))
            }
            Value::Null | Value::Str(_) | Value::List(_) => Ok(Value::Str(last.clone())),
            Value::Bool(_) => last
                .parse::<bool>()
                .map(Value::Bool)
                .map_err(|_| fail(last, self.type_name())),
            Value::Int(_) => last
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| fail(last, self.type_name())),
            Value::Float(_) => last
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| fail(last, self.type_name())),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
