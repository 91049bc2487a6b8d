use anyhow::{Context, Result};
use oraforge::TableDef;
use std::path::Path;

/// Load a table definition from a TOML file.
///
/// ```toml
/// name = "users"
/// primary_keys = ["id"]
/// unique_keys = ["email"]
///
/// [[fields]]
/// name = "id"
/// type = "NUMBER(9)"
///
/// [[fields]]
/// raw = "created_at DATE DEFAULT SYSDATE"
/// ```
pub fn load_table(path: impl AsRef<Path>) -> Result<TableDef> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read table definition {}", path.display()))?;

    let table: TableDef = toml::from_str(&contents)
        .with_context(|| format!("invalid table definition {}", path.display()))?;

    tracing::debug!(table = %table.name, fields = table.fields.len(), "loaded table definition");
    Ok(table)
}
