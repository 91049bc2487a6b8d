mod adhoc;
mod invalid_schema;
mod unsupported_feature;

use adhoc::AdhocError;
use invalid_schema::InvalidSchema;
use std::sync::Arc;
use unsupported_feature::UnsupportedFeature;

/// Returns early with an ad-hoc [`Error`] built from a format string, e.g.
/// when a descriptor value cannot be parsed.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while generating DDL.
///
/// Errors come from three places: descriptor validation (`invalid schema`),
/// features the targeted Oracle release rejects (`unsupported feature`), and
/// reading configuration or table definition files, bridged through
/// `anyhow`. Validation errors are wrapped in context naming the table or
/// field, and the display shows the chain outermost first:
/// ``table `users`: field 2: invalid schema: column name is empty``.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        let inner = err
            .inner
            .as_mut()
            .and_then(Arc::get_mut)
            .expect("consequent error must not be shared");
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        inner.cause = Some(self);
        err
    }

    /// The innermost error of the context chain. Kind predicates such as
    /// [`Error::is_invalid_schema`] look at this error, so wrapping a
    /// validation failure in context (`table \`users\``) keeps it classified.
    fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    /// Creates an ad-hoc error from pre-formatted arguments.
    ///
    /// Prefer the [`err!`](crate::err) and [`bail!`](crate::bail) macros.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args)))
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    InvalidSchema(InvalidSchema),
    UnsupportedFeature(UnsupportedFeature),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            UnsupportedFeature(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown oraforge error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("bad column: {}", "id"));
        assert_eq!(err.to_string(), "bad column: id");
    }

    #[test]
    fn error_chain_display() {
        let err = Error::invalid_schema("column `id` has no type")
            .context(err!("field 0"))
            .context(err!("CREATE TABLE users"));

        assert_eq!(
            err.to_string(),
            "CREATE TABLE users: field 0: invalid schema: column `id` has no type"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
        assert!(std::error::Error::source(&our_err).is_some());
    }

    #[test]
    fn io_error_bridge() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "users.toml not found");
        let our_err: Error = io_err.into();
        assert!(our_err.to_string().contains("users.toml not found"));
    }

    #[test]
    fn invalid_schema_predicate() {
        let err = Error::invalid_schema("table has no fields");
        assert!(err.is_invalid_schema());
        assert!(!err.is_unsupported_feature());
        assert_eq!(err.to_string(), "invalid schema: table has no fields");
    }

    #[test]
    fn unsupported_feature_predicate() {
        let err = Error::unsupported_feature("CREATE DATABASE");
        assert!(err.is_unsupported_feature());
        assert!(!err.is_invalid_schema());
        assert_eq!(err.to_string(), "unsupported feature: CREATE DATABASE");
    }

    #[test]
    fn predicates_see_the_root_cause() {
        let err = Error::invalid_schema("empty name").context(err!("DROP TABLE"));
        assert!(err.is_invalid_schema());
        assert!(!err.is_unsupported_feature());

        let err = Error::unsupported_feature("IF EXISTS")
            .context(err!("table `users`"))
            .context(err!("oraforge drop-table"));
        assert!(err.is_unsupported_feature());
    }

    #[test]
    #[should_panic(expected = "consequent error must not be shared")]
    fn context_rejects_shared_consequent() {
        let consequent = err!("table `users`");
        let _keep = consequent.clone();
        let _ = Error::invalid_schema("empty name").context(consequent);
    }

    #[test]
    #[should_panic(expected = "consequent error must not already have a cause")]
    fn context_rejects_consequent_with_cause() {
        let consequent = err!("field 0").context(err!("table `users`"));
        let _ = Error::invalid_schema("empty name").context(consequent);
    }
}
