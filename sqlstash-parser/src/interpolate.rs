//! Variable Interpolation
//!
//! Verbatim textual substitution of `@name` references with their defined
//! values. This is plain text splicing: no quoting is added or removed, no
//! escaping is performed, and the substituted value is never re-scanned for
//! further references. References with no table entry are left untouched so
//! interpolation can never fail.

use crate::document::VariableTable;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A variable reference: `@` followed by a maximal run of word characters.
static VARIABLE_REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@(\w+)").unwrap());

/// Replace every resolvable `@name` reference in `text` with its table value.
///
/// Single left-to-right pass over the original text; replacement output is
/// not rescanned, so a value containing `@` never triggers a second round of
/// substitution.
pub fn interpolate(text: &str, variables: &VariableTable) -> String {
    VARIABLE_REFERENCE
        .replace_all(text, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
