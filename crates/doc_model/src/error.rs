//! Error types for document model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocModelError {
    #[error("No table has been started; cannot append row")]
    NoOpenTable,

    #[error("Row has {found} cells but the table grid has {expected} columns")]
    ColumnMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, DocModelError>;
