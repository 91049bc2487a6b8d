mod config;
pub use config::Config;

mod forge;
pub use forge::Forge;

pub use oraforge_core::{
    schema::{self, AlterColumn, AlterType, ColumnAttrs, Field, TableDef, UniqueKey},
    Capability, Error, Result,
};
pub use oraforge_sql::{Serializer, Statement};
