//! Error types for the directory crate.
//!
//! Every failure while loading, validating or extending a directory
//! snapshot is one variant of `DirectoryError`. Filtering itself never
//! fails, so nothing in here is raised by the matching code.

use thiserror::Error;

/// Errors that can occur while loading or mutating a directory snapshot
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Dataset file could not be read or written
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Dataset content is not valid JSON for the expected shape
    #[error("Malformed dataset {source_name}: {reason}")]
    ParseError { source_name: String, reason: String },

    /// A record field had an out-of-domain value
    #[error("Invalid value for {field} on lawyer {id}: {value}")]
    InvalidValue {
        id: String,
        field: String,
        value: String,
    },

    /// Two records in one snapshot share an identifier
    #[error("Duplicate lawyer id: {0}")]
    DuplicateId(String),

    /// A lookup or annotation referenced an id that is not in the snapshot
    #[error("Unknown lawyer id: {0}")]
    UnknownLawyer(String),

    /// A registration form field was missing or unparsable
    #[error("Registration rejected, {field}: {reason}")]
    RegistrationError { field: String, reason: String },

    /// A registration reused an email already present in the directory
    #[error("A lawyer with email {0} is already registered")]
    DuplicateEmail(String),

    /// A filter value given as text could not be understood
    #[error("Unknown {kind} value: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DirectoryError>;
