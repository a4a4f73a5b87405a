//! File layer for the factfold workspace.
//!
//! Schema and fact histories travel as flat text: one record per line,
//! fields joined by `---`. This crate reads those files into typed records
//! and writes fact lists back out. It knows nothing about the fold.
//!
//! # Modules
//!
//! - [`format`] -- Line parsing and rendering, flag handling
//! - [`files`] -- Whole-file reads and writes
//! - [`error`] -- Shared error types

pub mod error;
pub mod files;
pub mod format;

// Re-export primary types for convenience.
pub use error::{RecordKind, StoreError};
pub use files::{read_facts_file, read_schema_file, write_active_facts_file, write_facts_file};
pub use format::{
    BoolMode, SEPARATOR, parse_facts, parse_schema, render_active_facts, render_facts,
    render_schema,
};
