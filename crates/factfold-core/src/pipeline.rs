//! The one-pass pipeline: load schema, load facts, fold, write.
//!
//! [`run`] is everything the binary does once configuration is settled.
//! [`fold`] is the in-memory part, usable without touching the filesystem.

use std::path::PathBuf;

use tracing::info;

use factfold_ledger::{SchemaIndex, active_facts};
use factfold_store::{StoreError, read_facts_file, read_schema_file, write_active_facts_file};
use factfold_types::{ActiveFact, FactOp, SchemaEntry};

use crate::config::{FoldConfig, OutputOrder};

/// Errors that can occur during a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Reading an input file or writing the output failed.
    #[error("store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: StoreError,
    },
}

/// What a pipeline run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Schema records loaded, duplicates included.
    pub schema_entries: usize,
    /// Fact operations folded.
    pub operations: usize,
    /// Active facts written.
    pub active_facts: usize,
    /// Where they were written.
    pub output: PathBuf,
}

/// Fold `ops` under `schema` and order the result.
pub fn fold(schema: Vec<SchemaEntry>, ops: &[FactOp], order: OutputOrder) -> Vec<ActiveFact> {
    let index = SchemaIndex::new(schema);
    let mut facts = active_facts(ops, &index);

    if order == OutputOrder::Sorted {
        // Stable, so multi-valued attributes keep their value order.
        facts.sort_by(|a, b| {
            a.entity
                .cmp(&b.entity)
                .then_with(|| a.attribute.cmp(&b.attribute))
        });
    }

    facts
}

/// Run the whole pipeline described by `config`.
///
/// Any load failure aborts the run before anything is written.
pub fn run(config: &FoldConfig) -> Result<RunSummary, PipelineError> {
    let schema = read_schema_file(&config.files.schema)?;
    let schema_entries = schema.len();
    info!(
        path = %config.files.schema.display(),
        entries = schema_entries,
        "schema loaded"
    );

    let ops = read_facts_file(&config.files.facts, config.fold.bool_mode())?;
    info!(
        path = %config.files.facts.display(),
        operations = ops.len(),
        strict_flags = config.fold.strict_flags,
        "fact history loaded"
    );

    let facts = fold(schema, &ops, config.fold.output_order);
    write_active_facts_file(&config.files.output, &facts)?;
    info!(
        path = %config.files.output.display(),
        active_facts = facts.len(),
        order = ?config.fold.output_order,
        "active facts written"
    );

    Ok(RunSummary {
        schema_entries,
        operations: ops.len(),
        active_facts: facts.len(),
        output: config.files.output.clone(),
    })
}
