use super::{Name, Statement};

use oraforge_core::{schema::verify_name, Result};

/// A statement to alter a SQL table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterTable {
    /// Current name of the table.
    pub name: Name,

    /// The alteration to apply.
    pub action: AlterTableAction,
}

/// The action to perform in an ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterTableAction {
    /// Rename the table to a new name.
    RenameTo(Name),
}

impl Statement {
    /// Renames a table.
    pub fn rename_table(name: &str, new_name: &str) -> Result<Self> {
        verify_name("table", name)?;
        verify_name("new table", new_name)?;

        Ok(AlterTable {
            name: Name::from(name),
            action: AlterTableAction::RenameTo(Name::from(new_name)),
        }
        .into())
    }
}

impl From<AlterTable> for Statement {
    fn from(value: AlterTable) -> Self {
        Self::AlterTable(value)
    }
}
