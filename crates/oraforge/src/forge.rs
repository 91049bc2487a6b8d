use crate::Config;

use oraforge_core::{
    schema::{AlterColumn, TableDef},
    Capability, Error, Result,
};
use oraforge_sql::{Serializer, Statement};

/// Generates Oracle DDL for table descriptors.
///
/// The forge only builds SQL text. Executing it is left to the caller.
#[derive(Debug, Clone)]
pub struct Forge {
    config: Config,
    capability: Capability,
    serializer: Serializer,
}

impl Forge {
    pub fn new(config: Config) -> Forge {
        let escape_char = config.escape_identifiers.then_some(config.escape_char);

        Forge {
            capability: config.capability(),
            serializer: Serializer::oracle().escape_char(escape_char),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn capability(&self) -> &Capability {
        &self.capability
    }

    /// Oracle schemas are user accounts, so databases cannot be created
    /// through the forge. Always returns `false`.
    pub fn create_database(&self, name: &str) -> bool {
        tracing::warn!(database = name, "CREATE DATABASE is not supported on Oracle");
        false
    }

    /// Always returns `false`; see [`Forge::create_database`].
    pub fn drop_database(&self, name: &str) -> bool {
        tracing::warn!(database = name, "DROP DATABASE is not supported on Oracle");
        false
    }

    pub fn create_table(&self, table: &TableDef, if_not_exists: bool) -> Result<String> {
        if if_not_exists && !self.capability.create_table_if_not_exists {
            return Err(Error::unsupported_feature(
                "CREATE TABLE IF NOT EXISTS requires Oracle 23ai or later",
            ));
        }

        self.render(Statement::create_table(table, if_not_exists)?)
    }

    pub fn drop_table(&self, name: &str) -> Result<String> {
        self.render(Statement::drop_table(name)?)
    }

    pub fn drop_table_if_exists(&self, name: &str) -> Result<String> {
        if !self.capability.drop_table_if_exists {
            return Err(Error::unsupported_feature(
                "DROP TABLE IF EXISTS requires Oracle 23ai or later",
            ));
        }

        self.render(Statement::drop_table_if_exists(name)?)
    }

    /// Adds, drops, or changes a single column.
    pub fn alter_table(&self, alter: &AlterColumn) -> Result<String> {
        self.render(Statement::alter_column(alter)?)
    }

    pub fn rename_table(&self, name: &str, new_name: &str) -> Result<String> {
        self.render(Statement::rename_table(name, new_name)?)
    }

    fn render(&self, stmt: Statement) -> Result<String> {
        let stmt = stmt.with_table_prefix(&self.config.table_prefix);
        let sql = self.serializer.serialize(&stmt);

        tracing::debug!(table = %stmt.table_name(), %sql, "generated DDL");
        Ok(sql)
    }
}

impl Default for Forge {
    fn default() -> Self {
        Forge::new(Config::default())
    }
}
