use crate::{bail, Error, Result};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of change an `ALTER TABLE` statement makes to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlterType {
    Add,
    Drop,
    Change,
}

impl AlterType {
    pub fn as_str(self) -> &'static str {
        match self {
            AlterType::Add => "ADD",
            AlterType::Drop => "DROP",
            AlterType::Change => "CHANGE",
        }
    }

    pub fn is_drop(self) -> bool {
        matches!(self, AlterType::Drop)
    }
}

/// Parses `ADD`, `DROP`, or `CHANGE` in any casing, as typed on the command
/// line.
impl FromStr for AlterType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ADD" => Ok(AlterType::Add),
            "DROP" => Ok(AlterType::Drop),
            "CHANGE" => Ok(AlterType::Change),
            _ => bail!("unknown ALTER type `{s}`; expected one of ADD, DROP, CHANGE"),
        }
    }
}

/// A single-column `ALTER TABLE` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterColumn {
    pub kind: AlterType,

    /// Table to alter, without any configured prefix.
    pub table: String,

    /// Column to add, drop, or change.
    pub column: String,

    /// Column definition (type and any trailing clauses), emitted verbatim.
    #[serde(default)]
    pub definition: String,

    #[serde(default)]
    pub default: Option<String>,

    #[serde(default)]
    pub nullable: bool,

    /// Column after which the new column is placed.
    #[serde(default)]
    pub after: Option<String>,
}

impl AlterColumn {
    pub fn new(kind: AlterType, table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            kind,
            table: table.into(),
            column: column.into(),
            definition: String::new(),
            default: None,
            nullable: false,
            after: None,
        }
    }

    pub fn add(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(AlterType::Add, table, column)
    }

    pub fn drop(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(AlterType::Drop, table, column)
    }

    pub fn change(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(AlterType::Change, table, column)
    }

    pub fn definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn after(mut self, column: impl Into<String>) -> Self {
        self.after = Some(column.into());
        self
    }
}
