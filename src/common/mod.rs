use std::io;
use thiserror::Error;

/// Errors surfaced by validation, the record store and persistence.
#[derive(Error, Debug)]
pub(crate) enum Error {
    /// Input cannot be parsed into the target type, e.g. a bad date or a non-numeric amount
    #[error("Invalid format: {0}")]
    Format(String),
    /// Input parses but violates a domain constraint
    #[error("Out of range: {0}")]
    Range(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn format(msg: impl Into<String>) -> Error {
        Error::Format(msg.into())
    }

    pub(crate) fn range(msg: impl Into<String>) -> Error {
        Error::Range(msg.into())
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        if e.is_io_error() {
            match e.into_kind() {
                csv::ErrorKind::Io(io_error) => Error::Io(io_error),
                other => Error::Format(format!("{other:?}")),
            }
        } else {
            Error::Format(e.to_string())
        }
    }
}

/// Simplifies the return signature of anything that can fail with one of our errors
pub(crate) type ResultError<T> = Result<T, Error>;
