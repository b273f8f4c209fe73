//! Table error types

use thiserror::Error;

/// Errors raised when loading rows into a table.
///
/// Deriving views never fails; only row identity validation does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("duplicate row id {id:?} at positions {first} and {second}")]
    DuplicateRowId {
        id: String,
        first: usize,
        second: usize,
    },
}
