//! Schema index and fact reducer for the factfold workspace.
//!
//! Turns an ordered history of assert/retract operations into the set of
//! facts that currently hold, respecting each attribute's cardinality.
//!
//! # Architecture
//!
//! - [`schema`] -- The [`SchemaIndex`]: attribute -> cardinality lookup.
//! - [`state`] -- [`EntityState`] and the [`AttributeValue`] variant type.
//! - [`reducer`] -- The [`FactReducer`] fold and the [`active_facts`] entry point.
//!
//! # Usage
//!
//! ```
//! use factfold_ledger::{SchemaIndex, active_facts};
//! use factfold_types::{ActiveFact, Cardinality, FactOp, SchemaEntry};
//!
//! let schema = SchemaIndex::new([
//!     SchemaEntry::new("name", "string", Cardinality::One),
//!     SchemaEntry::new("tag", "string", Cardinality::Many),
//! ]);
//!
//! let ops = [
//!     FactOp::assert("e1", "name", "Alice"),
//!     FactOp::assert("e1", "tag", "x"),
//!     FactOp::assert("e1", "tag", "y"),
//!     FactOp::retract("e1", "tag", "x"),
//!     FactOp::assert("e1", "name", "Bob"),
//! ];
//!
//! assert_eq!(
//!     active_facts(&ops, &schema),
//!     vec![ActiveFact::new("e1", "name", "Bob"), ActiveFact::new("e1", "tag", "y")],
//! );
//! ```

pub mod reducer;
pub mod schema;
pub mod state;

// Re-export primary types at crate root.
pub use reducer::{FactReducer, active_facts};
pub use schema::SchemaIndex;
pub use state::{AttributeValue, EntityAttributes, EntityState};
