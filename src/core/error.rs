//! Error types for store operations

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias using StoreError
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while reading or writing maintenance records
#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    /// A field was missing or had the wrong shape
    #[error("invalid record: {message}")]
    #[diagnostic(
        code(vinsight::validation),
        help("run `vinsight <command> --help` to see the expected arguments")
    )]
    Validation { message: String },

    /// The referenced record does not exist
    #[error("no record found with ID {id}")]
    #[diagnostic(code(vinsight::not_found), help("use `vinsight list` to see existing IDs"))]
    NotFound { id: i64 },

    /// None of the referenced records exist
    #[error("no records found with IDs {}", format_ids(.ids))]
    #[diagnostic(code(vinsight::not_found), help("use `vinsight list` to see existing IDs"))]
    NotFoundMany { ids: Vec<i64> },

    #[error("database error: {0}")]
    #[diagnostic(code(vinsight::storage))]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(vinsight::storage))]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    #[diagnostic(code(vinsight::storage))]
    Csv(#[from] csv::Error),

    /// The database file exists but cannot be used by this build
    #[error("storage error: {0}")]
    #[diagnostic(code(vinsight::storage))]
    Storage(String),
}

impl StoreError {
    /// Build a validation error from any message
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation {
            message: message.into(),
        }
    }

    /// True for the not-found family of errors
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::NotFound { .. } | StoreError::NotFoundMany { .. }
        )
    }

    /// True for errors raised by the underlying file or database
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            StoreError::Database(_) | StoreError::Io(_) | StoreError::Csv(_) | StoreError::Storage(_)
        )
    }
}

fn format_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
