//! Value: what a log document line reads as once coerced.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A parsed document: keys to values, one level of nesting in practice.
pub type Mapping = BTreeMap<String, Value>;

/// A scalar, list, or nested mapping read from a log document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    Map(Mapping),
}

impl Value {
    /// The nested mapping, if this is one.
    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Render a scalar as text.
    ///
    /// Whole numbers print without a fractional part, so a correlation key
    /// written as `42` reads back as `"42"`. Null, lists, maps, and empty
    /// strings have no text.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::String(s) if s.is_empty() => None,
            Self::String(s) => Some(s.clone()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(format_number(*n)),
            Self::Null | Self::List(_) | Self::Map(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
