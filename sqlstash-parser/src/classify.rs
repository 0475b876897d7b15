//! Risk Classification
//!
//! Heuristic classification of statement text as schema-changing and/or
//! row-mutating. Both predicates are case-insensitive substring tests over
//! the lower-cased text — not tokenized and not comment-aware, so a keyword
//! inside a comment or string literal still matches. False positives are
//! preferred over letting a destructive statement through unprompted.
//!
//! Callers classify the post-interpolation text so the verdict reflects
//! what will actually run.

/// Keywords that indicate the statement alters database structure.
const SCHEMA_KEYWORDS: &[&str] = &[
    "drop table",
    "drop database",
    "drop schema",
    "alter table",
    "alter database",
    "alter schema",
    "create table",
    "create database",
    "create schema",
    "truncate table",
    "truncate",
];

/// Keywords that indicate the statement mutates row data.
const MUTATION_KEYWORDS: &[&str] = &["update ", "delete ", "delete from", "insert"];

/// True iff the text contains a schema-altering keyword.
pub fn is_schema_change(text: &str) -> bool {
    let text = text.to_lowercase();
    SCHEMA_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

/// True iff the text contains a row-mutating keyword.
pub fn is_row_mutation(text: &str) -> bool {
    let text = text.to_lowercase();
    MUTATION_KEYWORDS
        .iter()
        .any(|keyword| text.contains(keyword))
}
