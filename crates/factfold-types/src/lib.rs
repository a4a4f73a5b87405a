//! Shared type definitions for the factfold workspace.
//!
//! This crate is the single source of truth for the records that flow
//! between the loader, the fold, and the writer.
//!
//! # Modules
//!
//! - [`enums`] -- [`Cardinality`] and the two-shape [`FactValue`]
//! - [`structs`] -- [`SchemaEntry`], [`FactOp`], and [`ActiveFact`]

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Cardinality, FactValue};
pub use structs::{ActiveFact, FactOp, SchemaEntry};
