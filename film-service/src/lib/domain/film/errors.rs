use thiserror::Error;

/// Error for film operations.
#[derive(Debug, Clone, Error)]
pub enum FilmError {
    #[error("Film not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
