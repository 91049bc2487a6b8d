use oraforge_core::{err, Capability, Result};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for DDL generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prepended to every table name.
    pub table_prefix: String,

    /// When false, identifiers are emitted exactly as given.
    pub escape_identifiers: bool,

    /// Character identifiers are wrapped in.
    pub escape_char: char,

    /// Target an Oracle release older than 23ai, which rejects
    /// `IF [NOT] EXISTS`.
    pub legacy_syntax: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_prefix: String::new(),
            escape_identifiers: true,
            escape_char: '"',
            legacy_syntax: false,
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a Config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| oraforge_core::Error::from(e).context(err!("{}", path.display())))?;
        contents.parse()
    }

    /// Set the table name prefix
    pub fn table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }

    /// Enable or disable identifier escaping
    pub fn escape_identifiers(mut self, escape: bool) -> Self {
        self.escape_identifiers = escape;
        self
    }

    /// Set the identifier escape character
    pub fn escape_char(mut self, escape_char: char) -> Self {
        self.escape_char = escape_char;
        self
    }

    /// Target a pre-23ai Oracle release
    pub fn legacy_syntax(mut self, legacy: bool) -> Self {
        self.legacy_syntax = legacy;
        self
    }

    /// The feature set of the targeted Oracle release.
    pub fn capability(&self) -> Capability {
        if self.legacy_syntax {
            Capability::ORACLE_LEGACY
        } else {
            Capability::ORACLE
        }
    }
}

impl std::str::FromStr for Config {
    type Err = oraforge_core::Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(anyhow::Error::from)?;
        Ok(config)
    }
}
