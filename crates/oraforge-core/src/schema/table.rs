use super::{ColumnAttrs, Field, UniqueKey};

use serde::{Deserialize, Serialize};

/// Everything needed to generate a `CREATE TABLE` statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    /// Name of the table, without any configured prefix.
    pub name: String,

    /// Column list, in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Columns forming the primary key.
    #[serde(default)]
    pub primary_keys: Vec<String>,

    /// Unique key groups.
    #[serde(default)]
    pub unique_keys: Vec<UniqueKey>,
}

impl TableDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Appends a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a structured column.
    pub fn column(self, name: impl Into<String>, attrs: ColumnAttrs) -> Self {
        self.field(Field::column(name, attrs))
    }

    /// Appends a hand-written column definition.
    pub fn raw(self, definition: impl Into<String>) -> Self {
        self.field(Field::raw(definition))
    }

    pub fn primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_keys.push(column.into());
        self
    }

    pub fn unique_key(mut self, key: impl Into<UniqueKey>) -> Self {
        self.unique_keys.push(key.into());
        self
    }
}
