//! The `---`-delimited line format.
//!
//! One record per line, fields joined by the literal [`SEPARATOR`]:
//!
//! ```text
//! name---string---one            schema: attribute, value kind, cardinality
//! e1---name---Alice---True       fact:   entity, attribute, value, flag
//! ```
//!
//! Values are typed on read with [`FactValue::parse`]. Flags are written as
//! `True`/`False` and read case-insensitively, so written files read back to
//! the same records.

use tracing::warn;

use factfold_types::{ActiveFact, Cardinality, FactOp, FactValue, SchemaEntry};

use crate::error::{RecordKind, StoreError};

/// Field separator.
pub const SEPARATOR: &str = "---";

/// Flag literal written for asserts and active facts.
pub const TRUE_LITERAL: &str = "True";

/// Flag literal written for retracts.
pub const FALSE_LITERAL: &str = "False";

/// How strictly the fact flag column is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoolMode {
    /// Lower-cased `true` is true; any other literal, blank included, is
    /// false.
    #[default]
    Permissive,
    /// Only `true` and `false` (any case) are accepted.
    Strict,
}

impl BoolMode {
    /// Interpret a flag literal found on `line`.
    pub fn parse_flag(self, literal: &str, line: usize) -> Result<bool, StoreError> {
        let lowered = literal.to_lowercase();
        match (self, lowered.as_str()) {
            (_, "true") => Ok(true),
            (Self::Permissive, _) | (Self::Strict, "false") => Ok(false),
            (Self::Strict, _) => Err(StoreError::InvalidFlag {
                line,
                literal: literal.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Parse schema text, one record per line.
///
/// Cardinality literals other than `one` and `many` are read as `one` and
/// logged.
pub fn parse_schema(text: &str) -> Result<Vec<SchemaEntry>, StoreError> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| parse_schema_line(line, idx.saturating_add(1)))
        .collect()
}

/// Parse fact text, one record per line.
pub fn parse_facts(text: &str, mode: BoolMode) -> Result<Vec<FactOp>, StoreError> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| parse_fact_line(line, idx.saturating_add(1), mode))
        .collect()
}

/// Parse one schema line. `line_no` is 1-based and only used in errors.
pub fn parse_schema_line(line: &str, line_no: usize) -> Result<SchemaEntry, StoreError> {
    let fields = split_fields(line);
    let [attribute, value_kind, cardinality] = fields.as_slice() else {
        return Err(malformed(RecordKind::Schema, line_no, fields.len()));
    };

    if !Cardinality::is_known_literal(cardinality) {
        warn!(
            line = line_no,
            attribute = %attribute,
            cardinality = %cardinality,
            "unrecognized cardinality, treating attribute as single-valued"
        );
    }

    Ok(SchemaEntry::new(
        *attribute,
        *value_kind,
        Cardinality::from_schema_literal(cardinality),
    ))
}

/// Parse one fact line. `line_no` is 1-based and only used in errors.
pub fn parse_fact_line(line: &str, line_no: usize, mode: BoolMode) -> Result<FactOp, StoreError> {
    let fields = split_fields(line);
    let [entity, attribute, value, flag] = fields.as_slice() else {
        return Err(malformed(RecordKind::Fact, line_no, fields.len()));
    };

    Ok(FactOp {
        entity: (*entity).to_owned(),
        attribute: (*attribute).to_owned(),
        value: FactValue::parse(value),
        asserted: mode.parse_flag(flag, line_no)?,
    })
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(SEPARATOR).collect()
}

const fn malformed(kind: RecordKind, line: usize, found: usize) -> StoreError {
    StoreError::MalformedRecord {
        kind,
        line,
        expected: kind.field_count(),
        found,
    }
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Render one fact line, newline included.
pub fn render_fact_line(entity: &str, attribute: &str, value: &FactValue, flag: bool) -> String {
    let flag = if flag { TRUE_LITERAL } else { FALSE_LITERAL };
    format!("{entity}{SEPARATOR}{attribute}{SEPARATOR}{value}{SEPARATOR}{flag}\n")
}

/// Render fact operations, one line each.
pub fn render_facts(facts: &[FactOp]) -> String {
    facts
        .iter()
        .map(|op| render_fact_line(&op.entity, &op.attribute, &op.value, op.asserted))
        .collect()
}

/// Render active facts, one line each, flagged `True`.
pub fn render_active_facts(facts: &[ActiveFact]) -> String {
    facts
        .iter()
        .map(|fact| render_fact_line(&fact.entity, &fact.attribute, &fact.value, fact.active))
        .collect()
}

/// Render schema entries, one line each.
pub fn render_schema(entries: &[SchemaEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            format!(
                "{}{SEPARATOR}{}{SEPARATOR}{}\n",
                e.attribute, e.value_kind, e.cardinality
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_schema_lines() {
        let schema = parse_schema("name---string---one\ntag---string---many\n");
        assert_eq!(
            schema.ok(),
            Some(vec![
                SchemaEntry::new("name", "string", Cardinality::One),
                SchemaEntry::new("tag", "string", Cardinality::Many),
            ]),
        );
    }

    #[test]
    fn unknown_cardinality_reads_as_one() {
        let schema = parse_schema("tag---string---several");
        assert_eq!(
            schema.ok(),
            Some(vec![SchemaEntry::new("tag", "string", Cardinality::One)]),
        );
    }

    #[test]
    fn parses_fact_lines_with_typed_values() {
        let facts = parse_facts(
            "e1---age---42---True\ne1---code---4a---false\ne1---name---abc---TRUE\n",
            BoolMode::Permissive,
        );
        assert_eq!(
            facts.ok(),
            Some(vec![
                FactOp::assert("e1", "age", 42_i64),
                FactOp::retract("e1", "code", "4a"),
                FactOp::assert("e1", "name", "abc"),
            ]),
        );
    }

    #[test]
    fn wrong_field_count_fails_the_whole_load() {
        let result = parse_facts("e1---name---Alice---true\ne1---name---Bob\n", BoolMode::Permissive);
        assert!(matches!(
            result,
            Err(StoreError::MalformedRecord {
                kind: RecordKind::Fact,
                line: 2,
                expected: 4,
                found: 3,
            })
        ));

        let result = parse_schema("name---string---one---extra");
        assert!(matches!(
            result,
            Err(StoreError::MalformedRecord { line: 1, expected: 3, found: 4, .. })
        ));
    }

    #[test]
    fn blank_line_is_malformed() {
        let result = parse_facts("e1---name---Alice---true\n\ne2---name---Bob---true\n", BoolMode::Permissive);
        assert!(matches!(
            result,
            Err(StoreError::MalformedRecord { line: 2, found: 1, .. })
        ));
    }

    #[test]
    fn empty_text_is_an_empty_load() {
        assert_eq!(parse_facts("", BoolMode::Strict).ok(), Some(Vec::new()));
        assert_eq!(parse_schema("").ok(), Some(Vec::new()));
    }

    #[test]
    fn permissive_flags_default_to_false() {
        let mode = BoolMode::Permissive;
        assert!(matches!(mode.parse_flag("TrUe", 1), Ok(true)));
        assert!(matches!(mode.parse_flag("yes", 1), Ok(false)));
        assert!(matches!(mode.parse_flag("", 1), Ok(false)));
    }

    #[test]
    fn strict_flags_reject_other_literals() {
        let mode = BoolMode::Strict;
        assert!(matches!(mode.parse_flag("FALSE", 1), Ok(false)));
        assert!(matches!(mode.parse_flag("True", 1), Ok(true)));
        assert!(matches!(
            mode.parse_flag("yes", 7),
            Err(StoreError::InvalidFlag { line: 7, .. })
        ));
    }

    #[test]
    fn renders_canonical_flags() {
        let text = render_facts(&[
            FactOp::assert("e1", "age", 42_i64),
            FactOp::retract("e1", "tag", "x"),
        ]);
        assert_eq!(text, "e1---age---42---True\ne1---tag---x---False\n");

        let text = render_active_facts(&[ActiveFact::new("e1", "tag", "y")]);
        assert_eq!(text, "e1---tag---y---True\n");
    }

    #[test]
    fn rendering_is_stable_under_reparse() {
        let facts = vec![
            FactOp::assert("e1", "name", "Alice"),
            FactOp::assert("e1", "age", -3_i64),
            FactOp::retract("e2", "tag", "with space"),
            FactOp::assert("e2", "note", ""),
        ];
        let first = render_facts(&facts);
        let reparsed = parse_facts(&first, BoolMode::Strict).ok().unwrap_or_default();
        assert_eq!(reparsed, facts);
        assert_eq!(render_facts(&reparsed), first);
    }

    #[test]
    fn schema_renders_back_to_its_source() {
        let source = "name---string---one\ntag---string---many\n";
        let entries = parse_schema(source).ok().unwrap_or_default();
        assert_eq!(render_schema(&entries), source);
    }
}
