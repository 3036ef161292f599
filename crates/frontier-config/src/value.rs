//! The operator-facing [`ConfigValue`] union.
//!
//! Runtime config editing accepts exactly four scalar shapes. Each field of
//! the record validates the shape (and range) it accepts; there is no
//! runtime type inspection beyond this explicit match.

use serde::{Deserialize, Serialize};

/// A scalar value supplied by operator tooling for a config edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// A string.
    Str(String),
}

impl ConfigValue {
    /// A short name for the value's type, for error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
        }
    }

    /// Parse an operator-supplied token into the most specific shape.
    ///
    /// Tries `bool`, then `i64`, then `f64`, and falls back to a string.
    /// The fallback means this never fails; a typo becomes a string value
    /// that per-field validation will reject with a clear error.
    pub fn parse(token: &str) -> Self {
        if let Ok(b) = token.parse::<bool>() {
            return Self::Bool(b);
        }
        if let Ok(i) = token.parse::<i64>() {
            return Self::Int(i);
        }
        if let Ok(f) = token.parse::<f64>() {
            return Self::Float(f);
        }
        Self::Str(token.to_owned())
    }
}

impl core::fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
