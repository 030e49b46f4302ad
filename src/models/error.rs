use crate::types::LineNumber;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The text source or manifest could not be opened or read.
    IoError(std::io::Error),
    /// A line of the text source is not valid UTF-8.
    DecodingError { line_number: LineNumber, message: String },
    /// An argument is outside the range an operation accepts (e.g. a negative word count).
    InvalidArgument(String),
    /// A book manifest is malformed.
    ManifestError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::DecodingError {
                line_number,
                message,
            } => write!(f, "Decoding Error on line {}: {}", line_number, message),
            Error::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            Error::ManifestError(msg) => write!(f, "Manifest Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        if err.is_io_error() {
            // Unwrap the IO error so callers see the same variant as for book files
            match err.into_kind() {
                csv::ErrorKind::Io(io_err) => Error::IoError(io_err),
                kind => Error::ManifestError(format!("{:?}", kind)),
            }
        } else {
            Error::ManifestError(err.to_string())
        }
    }
}
