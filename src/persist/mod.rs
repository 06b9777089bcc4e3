//! Relational persistence for the subject variant.

/// SQLite-backed subject table.
pub mod sqlite;

pub use sqlite::SubjectDb;

use thiserror::Error;

use crate::record::SubjectId;

/// Errors from the SQLite subject store.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Statement or connection failure.
    #[error("sqlite failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// No row matched the given id.
    #[error("no subject row with id {0}")]
    MissingRow(SubjectId),
}

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;
