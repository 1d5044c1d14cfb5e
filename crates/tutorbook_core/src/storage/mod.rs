//! Durable storage of the record book.
//!
//! # Responsibility
//! - Define the `RecordStorage` seam used by the session.
//! - Map persisted data problems to user-readable diagnostics.
//!
//! # Invariants
//! - `load` never returns a partially valid record book.
//! - `save` replaces the stored record book as a whole.

mod persisted;
mod schema;
mod sqlite;

pub use persisted::{
    PersistedAssignment, PersistedLesson, PersistedRecordBook, PersistedStudent,
    MESSAGE_DUPLICATE_ASSIGNMENT, MESSAGE_DUPLICATE_LESSON, MESSAGE_DUPLICATE_STUDENT,
};
pub use schema::supported_schema_version;
pub use sqlite::SqliteRecordStorage;

use crate::model::fields::FieldError;
use crate::model::record_book::RecordBook;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    Io(std::io::Error),
    /// The data file was written with a newer schema than this build reads.
    NewerSchema { found: u32, supported: u32 },
    /// A required field is null in stored data.
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
    /// A stored value fails its field validation; holds the constraints message.
    InvalidValue(&'static str),
    /// Stored data holds two records with the same identity.
    DuplicateRecords(&'static str),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::NewerSchema { found, supported } => write!(
                f,
                "data file uses record book schema {found}, this version of TutorBook reads up to {supported}"
            ),
            Self::MissingField { entity, field } => {
                write!(f, "{entity}'s {field} field is missing!")
            }
            Self::InvalidValue(message) | Self::DuplicateRecords(message) => f.write_str(message),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::NewerSchema { .. }
            | Self::MissingField { .. }
            | Self::InvalidValue(_)
            | Self::DuplicateRecords(_) => None,
        }
    }
}

impl StorageError {
    /// Stable code for log events; carries no user data.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite_error",
            Self::Io(_) => "io_error",
            Self::NewerSchema { .. } => "newer_schema",
            Self::MissingField { .. } => "missing_field",
            Self::InvalidValue(_) => "invalid_value",
            Self::DuplicateRecords(_) => "duplicate_records",
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<FieldError> for StorageError {
    fn from(value: FieldError) -> Self {
        Self::InvalidValue(value.constraints)
    }
}

/// Load/save contract for the record book.
pub trait RecordStorage {
    /// Reads the full record book.
    fn load(&mut self) -> StorageResult<RecordBook>;
    /// Replaces the stored record book with `book`.
    fn save(&mut self, book: &RecordBook) -> StorageResult<()>;
}
