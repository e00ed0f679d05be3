use std::error::Error as StdError;
use std::fmt;

use crate::json::JsonError;
use crate::model::error::Error as ModelError;

/// The common result type between most library functions.
///
/// The library exposes functions which, for a result type, exposes only one
/// type, rather than the usual 2 (`Result<T, Error>`). This is because all
/// functions that return a result return rill's [`Error`], so this is
/// implied, and a "simpler" result is used.
pub type Result<T> = std::result::Result<T, Error>;

/// A common error enum returned by most of the library's functionality within
/// a custom [`Result`].
///
/// All variants are data-level and recoverable: a failed decode of one frame
/// carries no state into the next, so the caller decides whether to log,
/// drop, or surface the failure.
#[derive(Debug)]
pub enum Error {
    /// An error from the JSON backend while reading or writing a wire value.
    Json(JsonError),
    /// An error while mapping a wire value onto a model type.
    Model(ModelError),
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Error {
        Error::Json(e)
    }
}

impl From<ModelError> for Error {
    fn from(e: ModelError) -> Error {
        Error::Model(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(inner) => fmt::Display::fmt(inner, f),
            Self::Model(inner) => fmt::Display::fmt(inner, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Json(inner) => Some(inner),
            Self::Model(inner) => Some(inner),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Error;

    fn assert_send_sync(_: &(impl Send + Sync)) {}

    #[test]
    fn error_is_send_sync() {
        let err = Error::Model(crate::model::error::Error::MalformedEnvelope);
        assert_send_sync(&err);
    }
}
