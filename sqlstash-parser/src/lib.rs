//! # sqlstash-parser
//!
//! Parser library for sqlstash statement files: plain `.sql` files holding
//! multiple statements, each introduced by a `-- @name` annotation and
//! separated by `---` delimiter lines, with optional `SET @var = value`
//! definitions that get interpolated into the extracted text.
//!
//! The pipeline is deliberately small and line-oriented:
//!
//! 1. [`document::parse`] scans the file once and produces a [`document::Document`]
//!    (ordered statements plus a flat variable table).
//! 2. [`interpolate::interpolate`] substitutes `@name` references in one
//!    statement's text.
//! 3. [`classify`] decides whether the final text looks schema-changing or
//!    row-mutating, which callers use to gate emission behind confirmation.
//!
//! [`loader::DocumentLoader`] is the file-facing front end used by the CLI
//! and by tests.

pub mod classify;
pub mod document;
pub mod interpolate;
pub mod loader;

pub use classify::{is_row_mutation, is_schema_change};
pub use document::{Document, Statement, UnknownStatement, VariableTable};
pub use interpolate::interpolate;
pub use loader::{DocumentLoader, LoaderError};
