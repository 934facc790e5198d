//! Common types used throughout the client
//!
//! Parameter values, the ordered parameter set, and the small enums that
//! the configuration and validator share.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Parameter Values
// ============================================================================

/// A single request parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Free-form text, written to the query string as-is
    Text(String),
    /// Integer value
    Integer(i64),
    /// Boolean flag
    Boolean(bool),
    /// List of values, written comma-separated
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Interpret the value as a non-negative integer.
    ///
    /// Decimal text is accepted the same way an integer is, so `"440"` and
    /// `440` are interchangeable.
    pub fn as_non_negative(&self) -> Option<u64> {
        match self {
            ParamValue::Integer(n) => u64::try_from(*n).ok(),
            ParamValue::Text(s) => {
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                s.parse().ok()
            }
            _ => None,
        }
    }

    /// Borrow the text of a `Text` value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the items of a `List` value
    pub fn as_list(&self) -> Option<&[ParamValue]> {
        match self {
            ParamValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Convert a loosely-typed JSON value
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(ParamValue::Text(s.clone())),
            Value::Bool(b) => Ok(ParamValue::Boolean(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(ParamValue::Integer(i)),
                None => Ok(ParamValue::Text(n.to_string())),
            },
            Value::Array(items) => items
                .iter()
                .map(ParamValue::from_json)
                .collect::<Result<Vec<_>>>()
                .map(ParamValue::List),
            Value::Null => Err(Error::invalid_format("null is not a parameter value")),
            Value::Object(_) => Err(Error::invalid_format(
                "nested objects are not parameter values",
            )),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Integer(n) => write!(f, "{n}"),
            ParamValue::Boolean(b) => write!(f, "{b}"),
            ParamValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Boolean(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    ParamValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => ParamValue::Integer(n),
            Err(_) => ParamValue::Text(value.to_string()),
        }
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ParamValue> + Clone> From<&[T]> for ParamValue {
    fn from(values: &[T]) -> Self {
        ParamValue::List(values.iter().cloned().map(Into::into).collect())
    }
}

// ============================================================================
// Request Parameters
// ============================================================================

/// Caller-supplied parameters for one request, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParameters {
    entries: Vec<(String, ParamValue)>,
}

impl RequestParameters {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a parameter. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Insert a parameter only when a value is present
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(name, value);
        }
    }

    /// Look up a parameter by exact name
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Whether a parameter with this exact name is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a parameter, returning its value
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Iterate over parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a parameter set from loosely-typed JSON.
    ///
    /// Anything other than a JSON object is rejected with
    /// [`Error::ParametersInvalidFormat`]. `null` members are skipped, the
    /// same as an absent optional argument.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::invalid_format(format!(
                "expected a JSON object, got {}",
                json_type_name(value)
            )));
        };

        let mut params = Self::new();
        for (name, value) in map {
            if value.is_null() {
                continue;
            }
            params.insert(name.clone(), ParamValue::from_json(value)?);
        }
        Ok(params)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for RequestParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Response Format
// ============================================================================

/// Format the client asks for and decodes responses as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// JSON, decoded to a structured value (default)
    #[default]
    Json,
    /// XML, decoded to a document
    Xml,
    /// Valve's KeyValues text, passed through as raw text
    Vdf,
}

impl ResponseFormat {
    /// Wire name used in the `format` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Xml => "xml",
            ResponseFormat::Vdf => "vdf",
        }
    }
}

impl FromStr for ResponseFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(ResponseFormat::Json),
            "xml" => Ok(ResponseFormat::Xml),
            "vdf" => Ok(ResponseFormat::Vdf),
            other => Err(Error::invalid_config(
                "format",
                format!("unsupported response format '{other}'"),
            )),
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Relationship
// ============================================================================

/// Friend list relationship filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    /// Every relationship
    All,
    /// Confirmed friends only
    Friend,
}

impl Relationship {
    /// Every accepted wire value
    pub const VALUES: [&'static str; 2] = ["all", "friend"];

    /// Wire value sent in the `relationship` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::All => "all",
            Relationship::Friend => "friend",
        }
    }
}

impl FromStr for Relationship {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(Relationship::All),
            "friend" => Ok(Relationship::Friend),
            other => Err(Error::invalid_param(
                "relationship",
                format!("'{other}' is not one of {}", Self::VALUES.join(", ")),
            )),
        }
    }
}

impl From<Relationship> for ParamValue {
    fn from(value: Relationship) -> Self {
        ParamValue::Text(value.as_str().to_string())
    }
}
