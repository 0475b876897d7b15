//! Document loading utilities
//!
//! `DocumentLoader` reads source text from a file or a string and hands it
//! to the document parser. The whole file is buffered; parsing is a single
//! pass over lines in memory. Used by the CLI and by tests.
//!
//! # Example
//!
//! ```rust
//! use sqlstash_parser::loader::DocumentLoader;
//!
//! let doc = DocumentLoader::from_string("---\n-- @name One\nSELECT 1;\n---").parse();
//! assert_eq!(doc.statements().len(), 1);
//! ```

use crate::document::{self, Document};
use std::fmt;
use std::fs;
use std::path::Path;

/// Error that can occur when loading a statement file.
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// The file could not be opened or read.
    NotFound { path: String, reason: String },
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::NotFound { path, reason } => {
                write!(f, "cannot read '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for LoaderError {}

/// Loads source text and runs the document parser on it.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Read the whole file into memory. Any read failure is `NotFound`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| LoaderError::NotFound {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self { source })
    }

    /// Use an in-memory string as the source.
    pub fn from_string(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Parse the loaded source into a [`Document`].
    pub fn parse(&self) -> Document {
        document::parse(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_surfaces_not_found() {
        let err = DocumentLoader::from_path("definitely/not/here.sql").unwrap_err();
        let LoaderError::NotFound { path, .. } = err;
        assert_eq!(path, "definitely/not/here.sql");
    }

    #[test]
    fn string_sources_parse_directly() {
        let doc = DocumentLoader::from_string("---\n-- @name A\nSELECT 1;\n---").parse();
        assert_eq!(doc.statement("A").unwrap().text, "SELECT 1;");
    }
}
