use super::{AlterType, Name, Statement};

use oraforge_core::{schema, Result};

/// A statement to add, drop, or change a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterColumn {
    /// Table containing the column.
    pub table: Name,

    pub kind: AlterType,

    pub column: Name,

    /// Column definition, serialized verbatim. Unused when dropping.
    pub definition: String,

    pub default: Option<String>,

    pub not_null: bool,

    /// Column after which the column is placed.
    pub after: Option<Name>,
}

impl Statement {
    /// Alters a single column of a table.
    pub fn alter_column(alter: &schema::AlterColumn) -> Result<Self> {
        alter.verify()?;

        Ok(AlterColumn {
            table: Name::from(&alter.table),
            kind: alter.kind,
            column: Name::from(&alter.column),
            definition: alter.definition.trim().to_string(),
            // An empty default means "no default".
            default: alter.default.clone().filter(|value| !value.is_empty()),
            not_null: !alter.nullable,
            after: alter.after.as_ref().map(Name::from),
        }
        .into())
    }
}

impl From<AlterColumn> for Statement {
    fn from(value: AlterColumn) -> Self {
        Self::AlterColumn(value)
    }
}
