use super::Name;

use oraforge_core::schema::Field;

/// A column in the column list of a `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnDef {
    /// Hand-written definition, serialized verbatim.
    Raw(String),

    Column {
        name: Name,

        /// Column type, serialized verbatim.
        ty: String,

        default: Option<String>,

        not_null: bool,

        constraint: Option<String>,
    },
}

impl ColumnDef {
    pub(crate) fn from_schema(field: &Field) -> ColumnDef {
        match field {
            Field::Raw { raw } => ColumnDef::Raw(raw.clone()),
            Field::Column { name, attrs } => ColumnDef::Column {
                name: Name::from(name),
                ty: attrs.ty.clone(),
                default: attrs.default.clone(),
                not_null: !attrs.nullable,
                constraint: attrs.constraint.clone(),
            },
        }
    }
}
