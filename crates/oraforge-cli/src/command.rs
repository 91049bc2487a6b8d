use crate::load_table;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use oraforge::{AlterColumn, AlterType, Forge};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Render CREATE TABLE from a TOML table definition
    CreateTable(CreateTableCommand),

    /// Render DROP TABLE
    DropTable(DropTableCommand),

    /// Render ALTER TABLE for a single column
    AlterTable(AlterTableCommand),

    /// Render a table rename
    RenameTable(RenameTableCommand),

    /// Report whether a database can be created (never on Oracle)
    CreateDatabase(DatabaseCommand),

    /// Report whether a database can be dropped (never on Oracle)
    DropDatabase(DatabaseCommand),
}

#[derive(Parser, Debug)]
pub(crate) struct CreateTableCommand {
    /// Path to the table definition
    file: PathBuf,

    /// Add an IF NOT EXISTS clause
    #[arg(long)]
    if_not_exists: bool,
}

#[derive(Parser, Debug)]
pub(crate) struct DropTableCommand {
    name: String,

    /// Add an IF EXISTS clause
    #[arg(long)]
    if_exists: bool,
}

#[derive(Parser, Debug)]
pub(crate) struct AlterTableCommand {
    table: String,

    /// ADD, DROP, or CHANGE (any casing)
    kind: AlterType,

    column: String,

    /// Column definition, e.g. "VARCHAR2(50)"
    #[arg(short, long, default_value = "")]
    definition: String,

    /// Default value
    #[arg(long)]
    default: Option<String>,

    /// Allow NULL values
    #[arg(long)]
    nullable: bool,

    /// Place the column after this one
    #[arg(long)]
    after: Option<String>,
}

#[derive(Parser, Debug)]
pub(crate) struct RenameTableCommand {
    name: String,
    new_name: String,
}

#[derive(Parser, Debug)]
pub(crate) struct DatabaseCommand {
    name: String,
}

impl Command {
    pub(crate) fn run(self, forge: &Forge) -> Result<String> {
        let sql = match self {
            Command::CreateTable(cmd) => {
                let table = load_table(&cmd.file)?;
                forge.create_table(&table, cmd.if_not_exists)?
            }
            Command::DropTable(cmd) if cmd.if_exists => forge.drop_table_if_exists(&cmd.name)?,
            Command::DropTable(cmd) => forge.drop_table(&cmd.name)?,
            Command::AlterTable(cmd) => {
                let mut alter = AlterColumn::new(cmd.kind, cmd.table, cmd.column)
                    .definition(cmd.definition)
                    .nullable(cmd.nullable);
                alter.default = cmd.default;
                alter.after = cmd.after;

                forge.alter_table(&alter)?
            }
            Command::RenameTable(cmd) => forge.rename_table(&cmd.name, &cmd.new_name)?,
            Command::CreateDatabase(cmd) => {
                if !forge.create_database(&cmd.name) {
                    bail!("creating databases is not supported; Oracle schemas are user accounts");
                }
                String::new()
            }
            Command::DropDatabase(cmd) => {
                if !forge.drop_database(&cmd.name) {
                    bail!("dropping databases is not supported; Oracle schemas are user accounts");
                }
                String::new()
            }
        };

        Ok(sql)
    }
}
