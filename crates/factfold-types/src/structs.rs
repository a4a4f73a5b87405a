//! Record types exchanged between the loader, the fold, and the writer.

use serde::{Deserialize, Serialize};

use crate::enums::{Cardinality, FactValue};

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// One schema record: an attribute, its declared value kind, and its
/// cardinality.
///
/// The value kind is informational only. Values are typed from their own
/// text, never from the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    /// Attribute name; the lookup key.
    pub attribute: String,
    /// Declared value kind (e.g. `"string"`, `"integer"`).
    pub value_kind: String,
    /// Whether the attribute holds one value or many per entity.
    pub cardinality: Cardinality,
}

impl SchemaEntry {
    /// Build a schema entry.
    pub fn new(
        attribute: impl Into<String>,
        value_kind: impl Into<String>,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            value_kind: value_kind.into(),
            cardinality,
        }
    }
}

// ---------------------------------------------------------------------------
// Fact operations
// ---------------------------------------------------------------------------

/// One historical assert or retract event.
///
/// There is no timestamp: the position of an operation in its input sequence
/// is its event time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactOp {
    /// The entity the fact is about.
    pub entity: String,
    /// The attribute being asserted or retracted.
    pub attribute: String,
    /// The value. Ignored by retracts of single-valued attributes.
    pub value: FactValue,
    /// `true` for an assert, `false` for a retract.
    pub asserted: bool,
}

impl FactOp {
    /// Build an assert operation.
    pub fn assert(
        entity: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<FactValue>,
    ) -> Self {
        Self {
            entity: entity.into(),
            attribute: attribute.into(),
            value: value.into(),
            asserted: true,
        }
    }

    /// Build a retract operation.
    pub fn retract(
        entity: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<FactValue>,
    ) -> Self {
        Self {
            entity: entity.into(),
            attribute: attribute.into(),
            value: value.into(),
            asserted: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Active facts
// ---------------------------------------------------------------------------

/// A fact that holds after folding the whole operation history.
///
/// Unlike [`FactOp::asserted`], the flag here means "currently active" and is
/// always `true` for facts produced by the fold.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActiveFact {
    /// The entity.
    pub entity: String,
    /// The attribute.
    pub attribute: String,
    /// The current value.
    pub value: FactValue,
    /// Always `true`.
    pub active: bool,
}

impl ActiveFact {
    /// Build an active fact.
    pub fn new(
        entity: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<FactValue>,
    ) -> Self {
        Self {
            entity: entity.into(),
            attribute: attribute.into(),
            value: value.into(),
            active: true,
        }
    }
}
