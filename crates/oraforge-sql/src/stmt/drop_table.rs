use super::{Name, Statement};

use oraforge_core::{schema::verify_name, Result};

/// A statement to drop a SQL table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTable {
    /// Name of the table.
    pub name: Name,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,
}

impl Statement {
    /// Drops a table.
    ///
    /// This function _does not_ add an `IF EXISTS` clause.
    pub fn drop_table(name: &str) -> Result<Self> {
        verify_name("table", name)?;

        Ok(DropTable {
            name: Name::from(name),
            if_exists: false,
        }
        .into())
    }

    /// Drops a table if it exists.
    ///
    /// This function _does_ add an `IF EXISTS` clause.
    pub fn drop_table_if_exists(name: &str) -> Result<Self> {
        verify_name("table", name)?;

        Ok(DropTable {
            name: Name::from(name),
            if_exists: true,
        }
        .into())
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
