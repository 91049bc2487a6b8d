use super::{AlterColumn, Field, TableDef};
use crate::{err, Error, Result};

use std::collections::HashSet;

/// Returns true when `value` is an expression that is used as-is instead of
/// being split into identifier segments, such as a function call or a string
/// literal.
pub fn is_expr(value: &str) -> bool {
    value.contains('(') || value.contains('\'')
}

/// Checks that `name` can be used as a table or column identifier.
///
/// Qualified names such as `hr.employees` must not have empty segments.
pub fn verify_name(what: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_schema(format!("{what} name is empty")));
    }

    if !is_expr(name) && name.split('.').any(|segment| segment.trim().is_empty()) {
        return Err(Error::invalid_schema(format!(
            "{what} name `{name}` has an empty segment"
        )));
    }

    Ok(())
}

impl TableDef {
    pub fn verify(&self) -> Result<()> {
        verify_name("table", &self.name)?;

        if self.fields.is_empty() {
            return Err(Error::invalid_schema(format!(
                "table `{}` has no fields",
                self.name
            )));
        }

        self.verify_fields()
            .and_then(|_| self.verify_keys())
            .map_err(|e| e.context(err!("table `{}`", self.name)))
    }

    fn verify_fields(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for (index, field) in self.fields.iter().enumerate() {
            if let Some(name) = field.name() {
                verify_name("column", name).map_err(|e| e.context(err!("field {index}")))?;

                if !seen.insert(name) {
                    return Err(Error::invalid_schema(format!(
                        "column `{name}` is declared more than once"
                    )));
                }
            }

            match field {
                Field::Raw { raw } if raw.trim().is_empty() => {
                    return Err(Error::invalid_schema(format!(
                        "field {index} is an empty column definition"
                    )));
                }
                Field::Column { name, attrs } if attrs.ty.trim().is_empty() => {
                    return Err(Error::invalid_schema(format!(
                        "column `{name}` has no type"
                    )));
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn verify_keys(&self) -> Result<()> {
        for column in &self.primary_keys {
            verify_name("primary key column", column)?;
        }

        for (index, key) in self.unique_keys.iter().enumerate() {
            if key.columns().is_empty() {
                return Err(Error::invalid_schema(format!(
                    "unique key {index} has no columns"
                )));
            }

            for column in key.columns() {
                verify_name("unique key column", column)?;
            }
        }

        Ok(())
    }
}

impl AlterColumn {
    pub fn verify(&self) -> Result<()> {
        verify_name("table", &self.table)?;
        verify_name("column", &self.column)?;

        if let Some(after) = &self.after {
            verify_name("AFTER column", after)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::{verify_name, AlterColumn, ColumnAttrs, TableDef};

    #[test]
    fn accepts_raw_and_structured_fields() {
        let table = TableDef::new("users")
            .column("id", ColumnAttrs::new("NUMBER(9)"))
            .raw("created_at DATE DEFAULT SYSDATE")
            .primary_key("id");

        assert!(table.verify().is_ok());
    }

    #[test]
    fn rejects_table_without_fields() {
        let err = TableDef::new("users").verify().unwrap_err();
        assert!(err.is_invalid_schema());
        assert_eq!(err.to_string(), "invalid schema: table `users` has no fields");
    }

    #[test]
    fn rejects_blank_table_name() {
        let err = TableDef::new("  ")
            .column("id", ColumnAttrs::new("NUMBER"))
            .verify()
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid schema: table name is empty");
    }

    #[test]
    fn rejects_column_without_type() {
        let err = TableDef::new("users")
            .column("id", ColumnAttrs::default())
            .verify()
            .unwrap_err();
        assert!(err.is_invalid_schema());
        assert_eq!(
            err.to_string(),
            "table `users`: invalid schema: column `id` has no type"
        );
    }

    #[test]
    fn rejects_empty_name_segments() {
        for name in ["hr.", ".employees", "a..b", "hr. .employees"] {
            let err = verify_name("table", name).unwrap_err();
            assert!(err.is_invalid_schema(), "{name}");
            assert_eq!(
                err.to_string(),
                format!("invalid schema: table name `{name}` has an empty segment")
            );
        }

        assert!(verify_name("table", "hr.employees").is_ok());
        assert!(verify_name("column", "NVL(a.b, 0)").is_ok());
    }

    #[test]
    fn rejects_empty_key_column_segment() {
        let err = TableDef::new("users")
            .column("id", ColumnAttrs::new("NUMBER"))
            .primary_key("users.")
            .verify()
            .unwrap_err();
        assert!(err.is_invalid_schema());
    }

    #[test]
    fn rejects_duplicate_columns() {
        let err = TableDef::new("users")
            .column("id", ColumnAttrs::new("NUMBER"))
            .column("id", ColumnAttrs::new("VARCHAR2(10)"))
            .verify()
            .unwrap_err();
        assert!(err.is_invalid_schema());
        assert!(err.to_string().ends_with("column `id` is declared more than once"));
    }

    #[test]
    fn rejects_empty_unique_key() {
        let err = TableDef::new("users")
            .column("id", ColumnAttrs::new("NUMBER"))
            .unique_key(Vec::<String>::new())
            .verify()
            .unwrap_err();
        assert!(err.is_invalid_schema());
        assert!(err.to_string().ends_with("unique key 0 has no columns"));
    }

    #[test]
    fn alter_requires_table_and_column() {
        assert!(AlterColumn::drop("users", "email").verify().is_ok());
        assert!(AlterColumn::drop("", "email").verify().is_err());
        assert!(AlterColumn::add("users", " ").verify().is_err());
        assert!(AlterColumn::add("users", "email")
            .after("")
            .verify()
            .is_err());
    }
}
