//! Error types for the file layer.
//!
//! All errors are propagated via [`StoreError`]. A malformed record fails the
//! whole load; nothing is partially returned.

use std::path::PathBuf;

/// Which kind of record a line was expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A schema line: attribute, value kind, cardinality.
    Schema,
    /// A fact line: entity, attribute, value, flag.
    Fact,
}

impl RecordKind {
    /// Number of `---`-separated fields a record of this kind carries.
    pub const fn field_count(self) -> usize {
        match self {
            Self::Schema => 3,
            Self::Fact => 4,
        }
    }
}

impl core::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Schema => f.write_str("schema"),
            Self::Fact => f.write_str("fact"),
        }
    }
}

/// Errors that can occur reading or writing delimited files.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A line had the wrong number of fields.
    #[error("malformed {kind} record on line {line}: expected {expected} fields, found {found}")]
    MalformedRecord {
        /// The record kind being parsed.
        kind: RecordKind,
        /// 1-based line number.
        line: usize,
        /// Fields a record of this kind carries.
        expected: usize,
        /// Fields actually found.
        found: usize,
    },

    /// A fact flag was neither `true` nor `false` (strict mode only).
    #[error("invalid fact flag on line {line}: {literal:?}")]
    InvalidFlag {
        /// 1-based line number.
        line: usize,
        /// The offending literal.
        literal: String,
    },
}

impl StoreError {
    /// Attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
