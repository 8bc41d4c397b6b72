//! Tolerant value coercion for generated documents.
//!
//! Generated documents are untrusted: numbers arrive as strings with unit
//! suffixes, lists contain stray scalars, flags arrive as `"true"`. The
//! helpers here turn such input into well-typed values or `None`, and the
//! `serde` adapters let the document model use them field by field.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keys probed, in order, when a numeric field arrives as an object.
pub const NESTED_NUMBER_KEYS: [&str; 4] = ["size", "value", "px", "pt"];

fn numeric_prefix() -> &'static Regex {
    static NUMERIC_PREFIX: OnceLock<Regex> = OnceLock::new();
    NUMERIC_PREFIX.get_or_init(|| {
        Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
            .unwrap_or_else(|_| unreachable!("numeric prefix pattern is valid"))
    })
}

/// Parse the leading numeric portion of a string (`"24px"` → `24.0`).
///
/// Returns `None` when there is no numeric prefix or the result is not finite.
#[must_use]
pub fn parse_number_prefix(input: &str) -> Option<f64> {
    let matched = numeric_prefix().find(input)?;
    matched
        .as_str()
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

fn coerce_scalar(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => parse_number_prefix(s),
        _ => None,
    }
}

/// Coerce an arbitrary JSON value to a finite number.
///
/// Numbers pass through, strings are parsed by numeric prefix, and objects
/// are probed one level deep through [`NESTED_NUMBER_KEYS`].
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Object(map) => NESTED_NUMBER_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(coerce_scalar),
        other => coerce_scalar(other),
    }
}

/// Stringify a scalar; objects, arrays and `null` yield `None`.
#[must_use]
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Interpret a loosely-typed flag.
#[must_use]
pub fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1"),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value))
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string(deserializer)?.unwrap_or_default())
}

pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_flag(&value))
}

pub(crate) fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

/// CSS length: numbers gain a `px` suffix, non-empty strings pass through.
pub(crate) fn opt_css_length<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()).map(|n| format!("{n}px")),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    })
}

/// A positive count, rounded; anything below one is discarded.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn opt_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value)
        .filter(|n| *n >= 1.0)
        .map(|n| n.round().min(f64::from(u32::MAX)) as u32))
}

/// Deserialize a list, skipping entries that do not fit `T`.
pub(crate) fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            tracing::warn!("Expected a list, found {}", value_kind(&other));
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let kind = value_kind(&item);
            match serde_json::from_value(item) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::warn!("Skipping malformed list entry {index} ({kind}): {e}");
                    None
                }
            }
        })
        .collect())
}

/// Deserialize a string list; scalars are stringified, other entries dropped.
pub(crate) fn string_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().filter_map(scalar_to_string).collect(),
        Value::String(single) => vec![single],
        _ => Vec::new(),
    })
}

/// Deserialize `T`, substituting its default when the value does not fit.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::debug!("Replacing malformed {} with defaults: {e}", std::any::type_name::<T>());
        T::default()
    }))
}

/// Keep a field only when it is a JSON object.
pub(crate) fn object<'de, D>(deserializer: D) -> Result<serde_json::Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    })
}
