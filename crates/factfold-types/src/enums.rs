//! Enumeration types for the factfold workspace.
//!
//! [`Cardinality`] is the only schema property the fold consults.
//! [`FactValue`] is the two-shape value carried by every fact.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Cardinality
// ---------------------------------------------------------------------------

/// How many current values an attribute may hold per entity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// A single current value; the latest assert wins.
    #[default]
    One,
    /// A list of current values; asserts append, retracts remove.
    Many,
}

impl Cardinality {
    /// Interpret the cardinality column of a schema record.
    ///
    /// Only the exact literal `many` selects [`Cardinality::Many`]. Every
    /// other literal, including `one`, the empty string, and typos, selects
    /// [`Cardinality::One`].
    pub fn from_schema_literal(literal: &str) -> Self {
        match literal {
            "many" => Self::Many,
            _ => Self::One,
        }
    }

    /// Whether `literal` is one of the two recognized spellings.
    pub fn is_known_literal(literal: &str) -> bool {
        matches!(literal, "one" | "many")
    }

    /// The canonical schema spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Many => "many",
        }
    }

    /// Returns `true` for [`Cardinality::Many`].
    pub const fn is_many(self) -> bool {
        matches!(self, Self::Many)
    }
}

impl core::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Fact values
// ---------------------------------------------------------------------------

/// The value carried by a fact: an integer or free text.
///
/// Serializes untagged, so JSON output carries integers as numbers and text
/// as strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    /// A value whose text was a complete signed 64-bit integer literal.
    Integer(i64),
    /// Any other value, kept verbatim.
    Text(String),
}

impl FactValue {
    /// Type a raw field.
    ///
    /// The field becomes [`FactValue::Integer`] when the whole of it parses as
    /// an `i64` (an optional sign followed by ASCII digits). Anything else,
    /// including integers that overflow `i64`, stays [`FactValue::Text`].
    /// Typing never fails.
    pub fn parse(raw: &str) -> Self {
        raw.parse::<i64>()
            .map_or_else(|_| Self::Text(raw.to_owned()), Self::Integer)
    }
}

impl core::fmt::Display for FactValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FactValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for FactValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for FactValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
