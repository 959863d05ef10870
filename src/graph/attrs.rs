// src/graph/attrs.rs
//! Open attribute payloads carried by nodes and edges.
//!
//! The engine never reads these. They exist so that loaded columns survive
//! until a caller wants them back.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Attribute map keyed by attribute name, iterated in name order.
pub type Attributes = BTreeMap<String, AttrValue>;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl AttrValue {
    /// Interprets a raw table cell.
    ///
    /// A cell is only typed when the value prints back to the same text, so
    /// `Display` always reproduces the cell. Values such as `007`, `+5`, `1.0`
    /// or `1e3` stay strings; [`as_f64`](Self::as_f64) still reads them as
    /// numbers.
    #[must_use]
    pub fn parse_cell(cell: &str) -> Self {
        match cell {
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            _ => {}
        }
        if let Ok(n) = cell.parse::<i64>() {
            if n.to_string() == cell {
                return Self::Int(n);
            }
        }
        if let Ok(x) = cell.parse::<f64>() {
            if x.is_finite() && x.to_string() == cell {
                return Self::Float(x);
            }
        }
        Self::Str(cell.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view, used for weight-like columns. Strings holding a finite
    /// number count too.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(x) => Some(*x),
            Self::Str(s) => s.trim().parse::<f64>().ok().filter(|x| x.is_finite()),
            Self::Bool(_) => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for AttrValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Builds an [`Attributes`] map from `(name, value)` pairs.
///
/// ```
/// use walkrank_core::graph::attrs;
///
/// let a = attrs([("airport_name", "DTW".into()), ("hub", true.into())]);
/// assert_eq!(a.len(), 2);
/// ```
#[must_use]
pub fn attrs<I, S>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (S, AttrValue)>,
    S: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}
