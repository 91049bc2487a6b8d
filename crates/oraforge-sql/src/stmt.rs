mod alter_column;
pub use alter_column::AlterColumn;

mod alter_table;
pub use alter_table::{AlterTable, AlterTableAction};

mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::{CreateTable, PrimaryKey};

mod drop_table;
pub use drop_table::DropTable;

mod name;
pub use name::Name;

pub use oraforge_core::schema::AlterType;

/// A DDL statement ready to be serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    AlterColumn(AlterColumn),
    AlterTable(AlterTable),
    CreateTable(CreateTable),
    DropTable(DropTable),
}

impl Statement {
    /// Prepends `prefix` to every table name the statement references.
    ///
    /// The primary key constraint of a created table is named after the table
    /// and picks up the prefix as well.
    pub fn with_table_prefix(mut self, prefix: &str) -> Self {
        if prefix.is_empty() {
            return self;
        }

        match &mut self {
            Statement::AlterColumn(stmt) => stmt.table.prefix(prefix),
            Statement::AlterTable(stmt) => {
                stmt.name.prefix(prefix);
                match &mut stmt.action {
                    AlterTableAction::RenameTo(name) => name.prefix(prefix),
                }
            }
            Statement::CreateTable(stmt) => {
                stmt.name.prefix(prefix);
                if let Some(pk) = &mut stmt.primary_key {
                    pk.name.prefix(prefix);
                }
            }
            Statement::DropTable(stmt) => stmt.name.prefix(prefix),
        }

        self
    }

    /// Returns the name of the table the statement operates on.
    pub fn table_name(&self) -> &Name {
        match self {
            Statement::AlterColumn(stmt) => &stmt.table,
            Statement::AlterTable(stmt) => &stmt.name,
            Statement::CreateTable(stmt) => &stmt.name,
            Statement::DropTable(stmt) => &stmt.name,
        }
    }
}
