use thiserror::Error;

/// Unified error type for database operations that application code can handle.
///
/// The analysis-results table carries no constraints the service recovers
/// from, so every sqlx failure is non-recoverable here.
#[derive(Error, Debug)]
pub enum DbError {
    /// Catch-all for non-recoverable errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        DbError::Other(anyhow::Error::from(err))
    }
}

/// Type alias for database operation results
pub type Result<T> = std::result::Result<T, DbError>;
