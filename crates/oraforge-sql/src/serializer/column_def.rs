use super::{Literal, ToSql};
use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        match self {
            stmt::ColumnDef::Raw(definition) => fmt!(f, definition),
            stmt::ColumnDef::Column {
                name,
                ty,
                default,
                not_null,
                constraint,
            } => {
                let default = default.as_ref().map(|value| (" DEFAULT ", Literal(value)));
                let not_null = if *not_null { " NOT NULL" } else { "" };
                let constraint = constraint
                    .as_ref()
                    .map(|constraint| (" CONSTRAINT ", constraint));

                fmt!(f, name " " ty default not_null constraint);
            }
        }
    }
}
