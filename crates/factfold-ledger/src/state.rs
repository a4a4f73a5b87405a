//! Per-entity accumulated state owned by a single fold.
//!
//! [`EntityState`] maps entity -> attribute -> [`AttributeValue`]. Both
//! levels are [`IndexMap`]s so iteration follows first insertion, which is
//! the order active facts are emitted in.

use indexmap::IndexMap;

use factfold_types::{ActiveFact, FactValue};

/// The current value(s) of one attribute of one entity.
///
/// The shape is chosen when the value is written, from the attribute's
/// cardinality in the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Current value of a single-valued attribute.
    Scalar(FactValue),
    /// Surviving values of a multi-valued attribute, in assert order.
    /// May contain duplicates and may be empty.
    MultiValue(Vec<FactValue>),
}

impl AttributeValue {
    /// View the current values as a slice. A scalar is a one-element slice.
    pub fn values(&self) -> &[FactValue] {
        match self {
            Self::Scalar(value) => core::slice::from_ref(value),
            Self::MultiValue(values) => values,
        }
    }

    /// Take the current values as a list. A scalar becomes a one-element list.
    pub fn into_values(self) -> Vec<FactValue> {
        match self {
            Self::Scalar(value) => vec![value],
            Self::MultiValue(values) => values,
        }
    }

    /// Returns `true` if nothing would be emitted for this attribute.
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}

/// Attributes of one entity, in first-insertion order.
pub type EntityAttributes = IndexMap<String, AttributeValue>;

/// Accumulated state of every entity touched by a fold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityState {
    entities: IndexMap<String, EntityAttributes>,
}

impl EntityState {
    /// Create empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities introduced so far, including entities whose
    /// attributes have all been retracted.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if no operation has been applied.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Current value of `attribute` on `entity`.
    pub fn get(&self, entity: &str, attribute: &str) -> Option<&AttributeValue> {
        self.entities.get(entity)?.get(attribute)
    }

    /// Number of active facts [`EntityState::into_active_facts`] would emit.
    pub fn active_fact_count(&self) -> usize {
        self.entities
            .values()
            .flat_map(IndexMap::values)
            .map(|value| value.values().len())
            .sum()
    }

    /// Attributes of `entity`, introducing the entity if it is new.
    pub(crate) fn entity_mut(&mut self, entity: &str) -> &mut EntityAttributes {
        self.entities.entry(entity.to_owned()).or_default()
    }

    /// Flatten into active facts: grouped by entity, then attribute, in
    /// first-insertion order; list elements in list order.
    pub fn into_active_facts(self) -> Vec<ActiveFact> {
        let mut facts = Vec::with_capacity(self.active_fact_count());

        for (entity, attributes) in self.entities {
            for (attribute, value) in attributes {
                match value {
                    AttributeValue::Scalar(value) => {
                        facts.push(ActiveFact::new(entity.clone(), attribute, value));
                    }
                    AttributeValue::MultiValue(values) => {
                        for value in values {
                            facts.push(ActiveFact::new(entity.clone(), attribute.clone(), value));
                        }
                    }
                }
            }
        }

        facts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_views_as_single_value() {
        let value = AttributeValue::Scalar(FactValue::from("Bob"));
        assert_eq!(value.values(), &[FactValue::from("Bob")]);
        assert!(!value.is_empty());
        assert!(AttributeValue::MultiValue(Vec::new()).is_empty());
    }

    #[test]
    fn flatten_preserves_insertion_order_and_skips_empty_lists() {
        let mut state = EntityState::new();
        state
            .entity_mut("e2")
            .insert("tag".to_owned(), AttributeValue::MultiValue(Vec::new()));
        state.entity_mut("e1").insert(
            "tag".to_owned(),
            AttributeValue::MultiValue(vec![FactValue::from("b"), FactValue::from("a")]),
        );
        state
            .entity_mut("e1")
            .insert("age".to_owned(), AttributeValue::Scalar(FactValue::from(3_i64)));
        state
            .entity_mut("e2")
            .insert("name".to_owned(), AttributeValue::Scalar(FactValue::from("Eve")));

        assert_eq!(state.entity_count(), 2);
        assert_eq!(state.active_fact_count(), 4);
        assert_eq!(
            state.into_active_facts(),
            vec![
                ActiveFact::new("e2", "name", "Eve"),
                ActiveFact::new("e1", "tag", "b"),
                ActiveFact::new("e1", "tag", "a"),
                ActiveFact::new("e1", "age", 3_i64),
            ],
        );
    }
}
