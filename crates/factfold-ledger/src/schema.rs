//! Attribute cardinality lookup.
//!
//! The [`SchemaIndex`] answers one question for the reducer: does this
//! attribute hold many values per entity? Entries are kept in load order and
//! scanned front to back, so the first entry for an attribute wins and later
//! duplicates are unreachable.

use factfold_types::{Cardinality, SchemaEntry};

/// Ordered, read-only view of the schema used during a fold.
#[derive(Debug, Clone, Default)]
pub struct SchemaIndex {
    /// Schema entries in load order. Not deduplicated.
    entries: Vec<SchemaEntry>,
}

impl SchemaIndex {
    /// Build an index from schema entries in load order.
    pub fn new(entries: impl IntoIterator<Item = SchemaEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Return the number of entries, duplicates included.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return whether the index has no entries.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the cardinality of `attribute`.
    ///
    /// Attributes missing from the schema are single-valued. This is a
    /// silent default, not an error.
    pub fn cardinality_of(&self, attribute: &str) -> Cardinality {
        match self.entries.iter().find(|e| e.attribute == attribute) {
            Some(entry) => entry.cardinality,
            None => Cardinality::One,
        }
    }

    /// Returns `true` if `attribute` is declared `many`.
    pub fn is_many(&self, attribute: &str) -> bool {
        self.cardinality_of(attribute).is_many()
    }
}

impl FromIterator<SchemaEntry> for SchemaIndex {
    fn from_iter<I: IntoIterator<Item = SchemaEntry>>(iter: I) -> Self {
        Self::new(iter)
    }
}
