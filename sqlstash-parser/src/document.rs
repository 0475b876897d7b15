//! Statement File Parsing
//!
//! Core line classification and block accumulation for statement files.
//! Every line is matched against an ordered sequence of patterns with early
//! exit; the order is load-bearing (a `SET` line is never statement content,
//! a `---` delimiter is never a comment, and so on):
//!
//! 1. variable definition (`SET @name = value`)
//! 2. block delimiter (three or more dashes, nothing else)
//! 3. name annotation (`-- @name Identifier`)
//! 4. other comment line (dropped)
//! 5. statement content
//!
//! Blocks are accumulated in a small state record and finalized on each
//! delimiter (and once more at end of input). A block that never received a
//! name produces no statement.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

/// Matches `SET @<name> = <value>`, whitespace-flexible around `=`, with an
/// optional trailing `;`. The value is captured verbatim, quotes included.
static VARIABLE_DEFINITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*SET\s+@(\w+)\s*=\s*(.*?)\s*;?\s*$").unwrap());

/// Matches a delimiter line: the trimmed line must be dashes and nothing else.
static DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^---+$").unwrap());

/// Matches a `-- @name Foo` annotation anywhere in a line. Whitespace around
/// `@name` is optional on both sides, so `--@nameFoo` is also accepted.
static NAME_ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"--\s*@name\s*(\w+)").unwrap());

/// One named unit of text extracted from a statement file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub name: String,
    pub text: String,
}

/// Flat mapping from variable name (without the `@`) to its literal defined
/// text, exactly as written in the file — including any quote characters.
pub type VariableTable = HashMap<String, String>;

/// Error returned when a requested statement name matches nothing parsed
/// from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatement(pub String);

impl fmt::Display for UnknownStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "statement '{}' not found", self.0)
    }
}

impl std::error::Error for UnknownStatement {}

/// Result of parsing one statement file: statements in source order plus the
/// variable table collected over the whole file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    statements: Vec<Statement>,
    variables: VariableTable,
}

impl Document {
    /// All statements in source order. Names are not required to be unique.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// The variable table for the whole file.
    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Statement names in source order, for listing.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().map(|s| s.name.as_str())
    }

    /// The first statement with the given name.
    pub fn statement(&self, name: &str) -> Result<&Statement, UnknownStatement> {
        self.statements
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| UnknownStatement(name.to_string()))
    }
}

/// Accumulation state for the block between two delimiters.
///
/// No block exists until the first delimiter has been seen; content and
/// `@name` lines ahead of it are dropped (`SET` lines are still collected).
#[derive(Debug, Default)]
struct Block {
    name: String,
    lines: Vec<String>,
}

impl Block {
    /// Finalize the block: join content, trim the surrounding whitespace,
    /// and drop the whole block if it never received a name.
    fn finish(self) -> Option<Statement> {
        if self.name.is_empty() {
            return None;
        }
        Some(Statement {
            name: self.name,
            text: self.lines.join("\n").trim().to_string(),
        })
    }
}

/// Parse a whole statement file in one linear pass.
///
/// Never fails: malformed annotations, unmatched delimiters, duplicate names
/// and redefined variables all degrade gracefully (drop, keep-both and
/// last-write-wins respectively).
pub fn parse(source: &str) -> Document {
    let mut statements = Vec::new();
    let mut variables = VariableTable::new();
    let mut current: Option<Block> = None;

    for line in source.lines() {
        if let Some(caps) = VARIABLE_DEFINITION.captures(line) {
            variables.insert(caps[1].to_string(), caps[2].to_string());
            continue;
        }

        let trimmed = line.trim();
        if DELIMITER.is_match(trimmed) {
            if let Some(statement) = current.take().and_then(Block::finish) {
                statements.push(statement);
            }
            current = Some(Block::default());
            continue;
        }

        if let Some(caps) = NAME_ANNOTATION.captures(line) {
            if let Some(block) = current.as_mut() {
                // Last @name in a block wins.
                block.name = caps[1].to_string();
            }
            continue;
        }

        if trimmed.starts_with("--") {
            continue;
        }

        if let Some(block) = current.as_mut() {
            block.lines.push(line.to_string());
        }
    }

    // Input ended without a trailing delimiter; finalize the open block.
    if let Some(statement) = current.and_then(Block::finish) {
        statements.push(statement);
    }

    Document {
        statements,
        variables,
    }
}
