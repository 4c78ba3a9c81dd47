//! Resolved configuration values
//!
//! A lookup yields one of four shapes: a scalar, a nested mapping, a sequence,
//! or nothing usable at all. `null` in a source document and a missing key are
//! both reported as [`Resolved::Absent`]; a source cannot use `null` to unset a
//! value contributed by a lower-priority source.

use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};
use serde_yaml::{Mapping, Number, Sequence, Value as YamlValue};
use std::fmt;

/// Leaf value found at a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Number(Number),
    String(String),
}

/// Result of resolving a path against the configured sources.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Scalar(Scalar),
    Mapping(Mapping),
    Sequence(Sequence),
    Absent,
}

impl Resolved {
    /// Copy a node out of a source document. `null` becomes `Absent` and YAML
    /// tags are looked through.
    pub fn from_yaml(value: &YamlValue) -> Self {
        match value {
            YamlValue::Null => Resolved::Absent,
            YamlValue::Bool(b) => Resolved::Scalar(Scalar::Bool(*b)),
            YamlValue::Number(n) => Resolved::Scalar(Scalar::Number(n.clone())),
            YamlValue::String(s) => Resolved::Scalar(Scalar::String(s.clone())),
            YamlValue::Sequence(items) => Resolved::Sequence(items.clone()),
            YamlValue::Mapping(map) => Resolved::Mapping(map.clone()),
            YamlValue::Tagged(tagged) => Resolved::from_yaml(&tagged.value),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Resolved::Absent)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Resolved::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Resolved::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Resolved::Scalar(Scalar::Number(n)) => n.as_i64(),
            _ => None,
        }
    }

    /// JSON projection used by the exporter. `None` for `Absent`.
    pub fn to_json(&self) -> Option<JsonValue> {
        match self {
            Resolved::Scalar(scalar) => Some(scalar.to_json()),
            Resolved::Mapping(map) => Some(mapping_to_json(map)),
            Resolved::Sequence(items) => Some(sequence_to_json(items)),
            Resolved::Absent => None,
        }
    }
}

impl Scalar {
    pub fn to_json(&self) -> JsonValue {
        match self {
            Scalar::Bool(b) => JsonValue::Bool(*b),
            Scalar::Number(n) => number_to_json(n),
            Scalar::String(s) => JsonValue::String(s.clone()),
        }
    }
}

/// Convert a YAML tree to JSON. Non-string keys are stringified and
/// non-finite floats become `null`.
pub fn yaml_to_json(value: &YamlValue) -> JsonValue {
    match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(*b),
        YamlValue::Number(n) => number_to_json(n),
        YamlValue::String(s) => JsonValue::String(s.clone()),
        YamlValue::Sequence(items) => sequence_to_json(items),
        YamlValue::Mapping(map) => mapping_to_json(map),
        YamlValue::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

fn sequence_to_json(items: &Sequence) -> JsonValue {
    JsonValue::Array(items.iter().map(yaml_to_json).collect())
}

fn mapping_to_json(map: &Mapping) -> JsonValue {
    let mut out = JsonMap::with_capacity(map.len());
    for (key, value) in map {
        out.insert(key_to_string(key), yaml_to_json(value));
    }
    JsonValue::Object(out)
}

fn number_to_json(n: &Number) -> JsonValue {
    if let Some(i) = n.as_i64() {
        JsonValue::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        JsonValue::Number(u.into())
    } else {
        n.as_f64().and_then(JsonNumber::from_f64).map(JsonValue::Number).unwrap_or(JsonValue::Null)
    }
}

/// String form of a mapping key, the same form a path segment is compared to.
pub(crate) fn key_to_string(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Number(n) => format_number(n),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Null => "null".to_string(),
        YamlValue::Tagged(tagged) => key_to_string(&tagged.value),
        other => yaml_to_json(other).to_string(),
    }
}

fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_nan() => "NaN".to_string(),
        Some(f) if f.is_infinite() && f > 0.0 => "Infinity".to_string(),
        Some(f) if f.is_infinite() => "-Infinity".to_string(),
        // f64's Display already drops the fraction of integral floats.
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => f.write_str(&format_number(n)),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

/// Console rendering: raw scalars, compact JSON for containers, and
/// `undefined` for a missing value.
impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            Resolved::Mapping(map) => write!(f, "{}", mapping_to_json(map)),
            Resolved::Sequence(items) => write!(f, "{}", sequence_to_json(items)),
            Resolved::Absent => f.write_str("undefined"),
        }
    }
}

impl From<Scalar> for Resolved {
    fn from(scalar: Scalar) -> Self {
        Resolved::Scalar(scalar)
    }
}

impl From<&str> for Resolved {
    fn from(value: &str) -> Self {
        Resolved::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<String> for Resolved {
    fn from(value: String) -> Self {
        Resolved::Scalar(Scalar::String(value))
    }
}

impl From<bool> for Resolved {
    fn from(value: bool) -> Self {
        Resolved::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Resolved {
    fn from(value: i64) -> Self {
        Resolved::Scalar(Scalar::Number(value.into()))
    }
}

impl From<f64> for Resolved {
    fn from(value: f64) -> Self {
        Resolved::Scalar(Scalar::Number(value.into()))
    }
}
