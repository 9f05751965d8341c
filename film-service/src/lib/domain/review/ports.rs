use async_trait::async_trait;

use crate::domain::film::models::FilmId;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::CreateReviewCommand;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewId;

/// Port for review operations.
#[async_trait]
pub trait ReviewServicePort: Send + Sync + 'static {
    /// Create a review and return its identifier.
    ///
    /// # Errors
    /// * `FilmNotFound` - Referenced film does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_review(&self, command: CreateReviewCommand) -> Result<ReviewId, ReviewError>;

    /// List reviews for a film, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_reviews(&self, film_id: FilmId) -> Result<Vec<Review>, ReviewError>;
}

/// Persistence operations for the review aggregate.
#[async_trait]
pub trait ReviewRepository: Send + Sync + 'static {
    /// Persist a new review and return its identifier.
    ///
    /// # Errors
    /// * `FilmNotFound` - Referenced film does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, review: CreateReviewCommand) -> Result<ReviewId, ReviewError>;

    /// Reviews for a film, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_film(&self, film_id: FilmId) -> Result<Vec<Review>, ReviewError>;
}
