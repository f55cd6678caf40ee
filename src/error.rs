use thiserror::Error;

/// Errors raised by a [crate::query::Query] collaborator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Requested object is not known to the collaborator
    #[error("unknown object \"{0}\"")]
    UnknownObject(String),
    /// Collaborator is not reachable or refused the request
    #[error("query failed: {0}")]
    Unavailable(String),
}

/// Errors that may rise when interpreting names
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParsingError {
    #[error("unknown bulletin format \"{0}\"")]
    UnknownFormat(String),
}

/// Errors that may rise in Formatting process.
/// Field validation never ends up here: it is reported
/// in [crate::diagnostics::Diagnostics].
#[derive(Error, Debug)]
pub enum FormattingError {
    #[error("i/o error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("no origin attached")]
    NoOrigin,
    #[error("{0} bulletins are not supported")]
    NotImplemented(crate::types::Format),
}

/// Crate level error
#[derive(Error, Debug)]
pub enum Error {
    #[error("query error: {0}")]
    Query(#[from] QueryError),
    #[error("parsing error: {0}")]
    Parsing(#[from] ParsingError),
    #[error("formatting error: {0}")]
    Formatting(#[from] FormattingError),
}
