mod command;
use command::Command;

mod table_file;
pub use table_file::load_table;

use anyhow::Result;
use clap::Parser;
use oraforge::{Config, Forge};
use std::path::PathBuf;

/// Command-line front end rendering Oracle DDL
pub struct OraforgeCli;

impl OraforgeCli {
    /// Parse command-line arguments and return the generated SQL
    pub fn parse_and_run() -> Result<String> {
        let cli = Cli::parse();
        cli.run()
    }

    /// Parse an iterator of arguments and return the generated SQL
    pub fn parse_from<I, T>(args: I) -> Result<String>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        cli.run()
    }
}

#[derive(Parser, Debug)]
#[command(name = "oraforge")]
#[command(about = "Generate Oracle DDL from table definitions")]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Prepend a prefix to every table name (overrides the config file)
    #[arg(long, global = true)]
    table_prefix: Option<String>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn run(self) -> Result<String> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(prefix) = self.table_prefix {
            config = config.table_prefix(prefix);
        }

        tracing::debug!(?config, "loaded configuration");

        self.command.run(&Forge::new(config))
    }
}
