pub mod driver;
pub use driver::Capability;

mod error;
pub use error::{Error, IntoError};

pub mod schema;

/// A Result type alias that uses oraforge's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
