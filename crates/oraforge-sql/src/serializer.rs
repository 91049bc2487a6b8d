#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Period};

mod ident;
use ident::Ident;

mod literal;
use literal::Literal;

// Fragment serializers
mod column_def;
mod name;
mod statement;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string
#[derive(Debug, Clone)]
pub struct Serializer {
    /// Character identifiers are wrapped in. `None` emits identifiers
    /// verbatim.
    escape_char: Option<char>,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    /// Oracle serializer, quoting identifiers with `"`.
    pub fn oracle() -> Serializer {
        Serializer {
            escape_char: Some('"'),
        }
    }

    /// Overrides the identifier escape character.
    pub fn escape_char(mut self, escape_char: Option<char>) -> Serializer {
        self.escape_char = escape_char;
        self
    }

    /// Serializes a statement.
    ///
    /// No statement terminator is appended; the Oracle client rejects a
    /// trailing `;` on DDL.
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);
        ret
    }

    /// Escapes a single identifier.
    pub fn escape_identifier(&self, ident: &str) -> String {
        let mut ret = String::new();
        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        Ident(ident).to_sql(&mut fmt);
        ret
    }

    /// Escapes a possibly qualified name, one segment at a time.
    pub fn protect_identifier(&self, name: &str) -> String {
        let name = crate::stmt::Name::from(name);
        let mut ret = String::new();
        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        (&name).to_sql(&mut fmt);
        ret
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Serializer::oracle()
    }
}
