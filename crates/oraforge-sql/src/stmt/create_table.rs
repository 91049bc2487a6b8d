use super::{ColumnDef, Name, Statement};

use oraforge_core::{schema::TableDef, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Primary key clause
    pub primary_key: Option<PrimaryKey>,

    /// One entry per `UNIQUE` clause
    pub unique_keys: Vec<Vec<Name>>,

    /// Whether or not to add an `IF NOT EXISTS` clause.
    pub if_not_exists: bool,
}

/// A named primary key constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKey {
    /// Constraint name. Tables name their primary key after themselves,
    /// without the owner, since constraint names cannot be qualified.
    pub name: Name,

    pub columns: Vec<Name>,
}

impl Statement {
    /// Creates a table.
    ///
    /// The descriptor is verified first; an invalid descriptor yields an
    /// invalid schema error.
    pub fn create_table(table: &TableDef, if_not_exists: bool) -> Result<Self> {
        table.verify()?;

        let name = Name::from(&table.name);

        let primary_key = if table.primary_keys.is_empty() {
            None
        } else {
            Some(PrimaryKey {
                name: name.last(),
                columns: table.primary_keys.iter().map(Name::from).collect(),
            })
        };

        Ok(CreateTable {
            name,
            columns: table.fields.iter().map(ColumnDef::from_schema).collect(),
            primary_key,
            unique_keys: table
                .unique_keys
                .iter()
                .map(|key| key.columns().iter().map(Name::from).collect())
                .collect(),
            if_not_exists,
        }
        .into())
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
