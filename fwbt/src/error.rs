//! Error type for file-level FWBT operations

use fwbt_core::FwbtError;

/// Errors from reading or writing FWBT files
#[derive(Debug)]
pub enum Error {
    /// Underlying file I/O failed
    Io(std::io::Error),
    /// The file contents are not a valid FWBT table
    Format(FwbtError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Format(err) => write!(f, "format error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Format(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<FwbtError> for Error {
    fn from(err: FwbtError) -> Self {
        Error::Format(err)
    }
}

/// Result type for file-level FWBT operations
pub type Result<T> = std::result::Result<T, Error>;
