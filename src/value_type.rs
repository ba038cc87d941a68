//! The [`ValueType`] enum and the per-token recognizers.
//!
//! Two non-text types are recognized: signed 64-bit integers and GUID
//! literals. Everything else is [`ValueType::Text`], the universal fallback
//! that every token trivially satisfies.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Semantic type inferred for a column of raw values, ordered by specificity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Parses as a signed 64-bit integer literal.
    Numeric,
    /// Parses as a textual GUID literal.
    UniqueIdentifier,
    /// Anything else.
    Text,
}

impl ValueType {
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Numeric => "numeric",
            ValueType::UniqueIdentifier => "uniqueidentifier",
            ValueType::Text => "text",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown value type '{0}'; supported types: numeric, uniqueidentifier, text")]
pub struct ParseValueTypeError(String);

impl std::str::FromStr for ValueType {
    type Err = ParseValueTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "numeric" | "integer" | "int" => Ok(ValueType::Numeric),
            "uniqueidentifier" | "guid" | "uuid" => Ok(ValueType::UniqueIdentifier),
            "text" | "string" => Ok(ValueType::Text),
            _ => Err(ParseValueTypeError(value.to_string())),
        }
    }
}

/// Recognizes the [`ValueType`] of a single raw value.
///
/// Recognizers are tried from most to least specific; `Text` never fails.
pub fn value_type_of(value: &str) -> ValueType {
    if parse_integer(value).is_some() {
        return ValueType::Numeric;
    }
    if parse_guid(value).is_some() {
        return ValueType::UniqueIdentifier;
    }
    ValueType::Text
}

/// Checks whether a raw value conforms to an already-inferred type.
///
/// Reapplies the matching recognizer for the two non-text types; `Text`
/// matches trivially.
pub fn value_matches_type(value: &str, value_type: ValueType) -> bool {
    match value_type {
        ValueType::Numeric => parse_integer(value).is_some(),
        ValueType::UniqueIdentifier => parse_guid(value).is_some(),
        ValueType::Text => true,
    }
}

fn parse_integer(value: &str) -> Option<i64> {
    value.parse::<i64>().ok()
}

fn parse_guid(value: &str) -> Option<Uuid> {
    Uuid::parse_str(strip_guid_decorations(value)).ok()
}

/// Strips one balanced pair of braces or parentheses around a GUID literal.
///
/// Mismatched decorations (`{...)` and the like) are left in place so the
/// parse below rejects them.
fn strip_guid_decorations(value: &str) -> &str {
    if let Some(inner) = value.strip_prefix('{').and_then(|v| v.strip_suffix('}')) {
        return inner;
    }
    if let Some(inner) = value.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        return inner;
    }
    value
}
