use thiserror::Error;

/// Error for Rating validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("Rating out of range: expected {min} to {max}, got {actual}")]
    OutOfRange { min: i32, max: i32, actual: i32 },
}

/// Error for review operations.
#[derive(Debug, Clone, Error)]
pub enum ReviewError {
    #[error("Invalid rating: {0}")]
    InvalidRating(#[from] RatingError),

    #[error("Film not found: {0}")]
    FilmNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
