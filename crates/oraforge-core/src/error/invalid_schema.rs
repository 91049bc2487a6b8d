use super::Error;

/// Error when a table descriptor cannot be turned into DDL.
///
/// This occurs when:
/// - A table, column, or key name is empty
/// - A table has no fields
/// - A structured column has no `TYPE`
/// - A unique key group lists no columns
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    ///
    /// Raised by `TableDef::verify` and `AlterColumn::verify` before any SQL
    /// is generated, so a rejected descriptor never yields partial DDL.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is an invalid schema
    /// error, regardless of the context wrapped around it.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidSchema(_))
    }
}
