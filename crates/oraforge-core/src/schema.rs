//! Descriptors for the tables and columns a DDL statement is generated from.
//!
//! Descriptors are plain data. They are built in code through the builder
//! methods or deserialized from a table definition file, then validated with
//! `verify` before a statement is generated.

mod alter;
pub use alter::{AlterColumn, AlterType};

mod column_attrs;
pub use column_attrs::ColumnAttrs;

mod field;
pub use field::Field;

mod table;
pub use table::TableDef;

mod unique_key;
pub use unique_key::UniqueKey;

mod verify;
pub use verify::{is_expr, verify_name};
