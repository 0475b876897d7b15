//! Configuration loader for the sqlstash CLI.
//!
//! `defaults/sqlstash.default.json` is embedded into the binary so defaults
//! stay in one place. The user's `~/.sqlstash/config.json` is layered on top
//! of those defaults via [`Loader`] before deserializing into [`StashConfig`].
//! The file is optional, and callers that want the original behavior of
//! "broken config acts like no config" can fall back to
//! [`StashConfig::default`] when [`Loader::build`] errors.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_JSON: &str = include_str!("../defaults/sqlstash.default.json");

/// Confirmation switches consumed by the sqlstash CLI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StashConfig {
    /// Confirm before emitting any statement.
    pub confirm: bool,
    /// Confirm before emitting schema-altering statements.
    pub confirm_schema_changes: bool,
    /// Confirm before emitting row-mutating statements.
    pub confirm_updates: bool,
}

impl Default for StashConfig {
    fn default() -> Self {
        Self {
            confirm: false,
            confirm_schema_changes: true,
            confirm_updates: true,
        }
    }
}

/// Location of the user configuration file: `$HOME/.sqlstash/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".sqlstash").join("config.json"))
}

/// Helper for layering the user file over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_JSON, FileFormat::Json));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Json)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Json)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<StashConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<StashConfig, ConfigError> {
    Loader::new().build()
}
