//! Reading and writing delimited files on disk.
//!
//! Each function reads or writes a whole file. Loads are all-or-nothing:
//! the first malformed line fails the call.

use std::path::Path;

use tracing::debug;

use factfold_types::{ActiveFact, FactOp, SchemaEntry};

use crate::error::StoreError;
use crate::format::{BoolMode, parse_facts, parse_schema, render_active_facts, render_facts};

/// Read a schema file.
pub fn read_schema_file(path: &Path) -> Result<Vec<SchemaEntry>, StoreError> {
    let text = read_text(path)?;
    let entries = parse_schema(&text)?;
    debug!(path = %path.display(), entries = entries.len(), "schema file loaded");
    Ok(entries)
}

/// Read a fact file.
pub fn read_facts_file(path: &Path, mode: BoolMode) -> Result<Vec<FactOp>, StoreError> {
    let text = read_text(path)?;
    let ops = parse_facts(&text, mode)?;
    debug!(path = %path.display(), operations = ops.len(), "fact file loaded");
    Ok(ops)
}

/// Write fact operations, replacing any existing file.
pub fn write_facts_file(path: &Path, facts: &[FactOp]) -> Result<(), StoreError> {
    write_text(path, &render_facts(facts))?;
    debug!(path = %path.display(), records = facts.len(), "fact file written");
    Ok(())
}

/// Write active facts, replacing any existing file.
pub fn write_active_facts_file(path: &Path, facts: &[ActiveFact]) -> Result<(), StoreError> {
    write_text(path, &render_active_facts(facts))?;
    debug!(path = %path.display(), records = facts.len(), "active fact file written");
    Ok(())
}

fn read_text(path: &Path) -> Result<String, StoreError> {
    std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))
}

fn write_text(path: &Path, text: &str) -> Result<(), StoreError> {
    std::fs::write(path, text).map_err(|e| StoreError::io(path, e))
}
