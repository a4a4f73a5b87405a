//! The fact reducer: folds an ordered operation sequence into entity state.
//!
//! Operations are applied strictly in input order. There is no timestamp;
//! sequence position is event time.
//!
//! | Operation | `many` attribute | `one` attribute |
//! |-----------|------------------|-----------------|
//! | assert | append value (duplicates kept) | overwrite value |
//! | retract | remove every occurrence of value | delete attribute, value ignored |
//!
//! Retracting something that is not there is a no-op. The fold has no error
//! conditions.

use tracing::{debug, trace};

use factfold_types::{ActiveFact, FactOp, FactValue};

use crate::schema::SchemaIndex;
use crate::state::{AttributeValue, EntityAttributes, EntityState};

/// Folds fact operations into an [`EntityState`] under a [`SchemaIndex`].
///
/// A reducer owns its state exclusively and only borrows the schema, so
/// independent folds can share one index.
#[derive(Debug)]
pub struct FactReducer<'s> {
    schema: &'s SchemaIndex,
    state: EntityState,
    applied: usize,
}

impl<'s> FactReducer<'s> {
    /// Create a reducer with empty state.
    pub fn new(schema: &'s SchemaIndex) -> Self {
        Self {
            schema,
            state: EntityState::new(),
            applied: 0,
        }
    }

    /// Number of operations applied so far.
    pub const fn applied(&self) -> usize {
        self.applied
    }

    /// The state accumulated so far.
    pub const fn state(&self) -> &EntityState {
        &self.state
    }

    /// Apply one operation.
    pub fn apply(&mut self, op: &FactOp) {
        let is_many = self.schema.is_many(&op.attribute);
        trace!(
            entity = op.entity,
            attribute = op.attribute,
            value = %op.value,
            asserted = op.asserted,
            is_many,
            "applying fact operation"
        );

        let attributes = self.state.entity_mut(&op.entity);
        match (op.asserted, is_many) {
            (true, true) => assert_many(attributes, &op.attribute, &op.value),
            (true, false) => assert_one(attributes, &op.attribute, &op.value),
            (false, true) => retract_many(attributes, &op.attribute, &op.value),
            (false, false) => retract_one(attributes, &op.attribute),
        }

        self.applied = self.applied.saturating_add(1);
    }

    /// Apply every operation in order.
    pub fn apply_all<'o>(&mut self, ops: impl IntoIterator<Item = &'o FactOp>) {
        for op in ops {
            self.apply(op);
        }
    }

    /// Consume the reducer and return the final state.
    pub fn into_state(self) -> EntityState {
        debug!(
            operations = self.applied,
            entities = self.state.entity_count(),
            "fold complete"
        );
        self.state
    }

    /// Consume the reducer and flatten its state into active facts.
    pub fn into_active_facts(self) -> Vec<ActiveFact> {
        let facts = self.into_state().into_active_facts();
        debug!(active_facts = facts.len(), "active facts assembled");
        facts
    }
}

/// Fold `ops` in order under `schema` and return the active facts.
///
/// Facts are grouped by entity, then attribute, both in first-insertion
/// order. Values of a multi-valued attribute follow assert order.
pub fn active_facts<'o>(
    ops: impl IntoIterator<Item = &'o FactOp>,
    schema: &SchemaIndex,
) -> Vec<ActiveFact> {
    let mut reducer = FactReducer::new(schema);
    reducer.apply_all(ops);
    reducer.into_active_facts()
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

fn assert_many(attributes: &mut EntityAttributes, attribute: &str, value: &FactValue) {
    let mut values = take_list(attributes, attribute);
    values.push(value.clone());
    attributes.insert(attribute.to_owned(), AttributeValue::MultiValue(values));
}

fn assert_one(attributes: &mut EntityAttributes, attribute: &str, value: &FactValue) {
    // Overwriting keeps the attribute's position.
    attributes.insert(attribute.to_owned(), AttributeValue::Scalar(value.clone()));
}

fn retract_many(attributes: &mut EntityAttributes, attribute: &str, value: &FactValue) {
    // An absent attribute still takes its place in the emission order.
    let mut values = take_list(attributes, attribute);
    values.retain(|v| v != value);
    attributes.insert(attribute.to_owned(), AttributeValue::MultiValue(values));
}

fn retract_one(attributes: &mut EntityAttributes, attribute: &str) {
    // A later re-assert lands after the entity's other attributes.
    attributes.shift_remove(attribute);
}

/// Take the list stored under `attribute`, leaving an empty list in its slot.
/// A scalar is taken as a one-element list.
fn take_list(attributes: &mut EntityAttributes, attribute: &str) -> Vec<FactValue> {
    let slot = attributes
        .entry(attribute.to_owned())
        .or_insert_with(|| AttributeValue::MultiValue(Vec::new()));
    core::mem::replace(slot, AttributeValue::MultiValue(Vec::new())).into_values()
}
