//! Runtime value representation

use std::fmt;

/// A runtime value
///
/// Today only numbers exist. The enum is non-exhaustive so further variants
/// (strings, booleans, objects) can land without touching instruction
/// dispatch.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum Value {
    Number(f64),
}

impl Value {
    pub const fn number(value: f64) -> Self {
        Value::Number(value)
    }

    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
        }
    }
}
