use super::Error;

/// Error when the targeted Oracle release cannot express a requested
/// operation.
///
/// Releases before 23ai reject `CREATE TABLE IF NOT EXISTS` and
/// `DROP TABLE IF EXISTS`; the forge reports this instead of emitting SQL the
/// server would refuse. Creating or dropping a database is *not* reported
/// through this error: those calls return `false`.
#[derive(Debug)]
pub(super) struct UnsupportedFeature {
    message: Box<str>,
}

impl std::error::Error for UnsupportedFeature {}

impl core::fmt::Display for UnsupportedFeature {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported feature: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported feature error. The message names the clause or
    /// statement, e.g. `DROP TABLE IF EXISTS requires Oracle 23ai or later`.
    pub fn unsupported_feature(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedFeature(UnsupportedFeature {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is an unsupported
    /// feature error.
    pub fn is_unsupported_feature(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::UnsupportedFeature(_))
    }
}
