use super::{Comma, Literal, ToSql};
use crate::stmt;

struct ColumnsWithConstraints<'a>(&'a stmt::CreateTable);

impl ToSql for ColumnsWithConstraints<'_> {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        for (index, column) in self.0.columns.iter().enumerate() {
            fmt!(f, "\n\t" column);

            if index + 1 < self.0.columns.len() {
                fmt!(f, ",");
            }
        }

        if let Some(pk) = &self.0.primary_key {
            let name = &pk.name;
            let columns = Comma(&pk.columns);
            fmt!(f, ",\n\tCONSTRAINT " name " PRIMARY KEY (" columns ")");
        }

        for key in &self.0.unique_keys {
            fmt!(f, ",\n\tUNIQUE (" Comma(key) ")");
        }

        fmt!(f, "\n");
    }
}

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        match self {
            stmt::Statement::AlterColumn(stmt) => stmt.to_sql(f),
            stmt::Statement::AlterTable(stmt) => stmt.to_sql(f),
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
            stmt::Statement::DropTable(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::AlterColumn {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let table_name = &self.table;
        let column_name = &self.column;
        fmt!(f, "ALTER TABLE " table_name " " self.kind.as_str() " " column_name);

        // Dropping a column needs nothing beyond its name.
        if self.kind.is_drop() {
            return;
        }

        let definition = if self.definition.is_empty() {
            None
        } else {
            Some((" ", &self.definition))
        };
        let default = self
            .default
            .as_ref()
            .map(|value| (" DEFAULT ", Literal(value)));
        let null = if self.not_null { " NOT NULL" } else { " NULL" };
        let after = self.after.as_ref().map(|after| (" AFTER ", after));

        fmt!(f, definition default null after);
    }
}

impl ToSql for &stmt::AlterTable {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        match &self.action {
            stmt::AlterTableAction::RenameTo(new_name) => {
                let table_name = &self.name;
                fmt!(f, "ALTER TABLE " table_name " RENAME TO " new_name);
            }
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };
        let name = &self.name;
        let columns = ColumnsWithConstraints(self);

        fmt!(f, "CREATE TABLE " if_not_exists name " (" columns ")");
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        let name = &self.name;
        fmt!(f, "DROP TABLE " if_exists name);
    }
}
