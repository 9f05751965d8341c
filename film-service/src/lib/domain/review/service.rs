use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::film::models::FilmId;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::CreateReviewCommand;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewId;
use crate::domain::review::ports::ReviewRepository;
use crate::domain::review::ports::ReviewServicePort;

/// Domain service for film reviews.
pub struct ReviewService<RR>
where
    RR: ReviewRepository,
{
    repository: Arc<RR>,
}

impl<RR> ReviewService<RR>
where
    RR: ReviewRepository,
{
    pub fn new(repository: Arc<RR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<RR> ReviewServicePort for ReviewService<RR>
where
    RR: ReviewRepository,
{
    async fn create_review(&self, command: CreateReviewCommand) -> Result<ReviewId, ReviewError> {
        let id = self.repository.create(command).await?;
        tracing::info!(review_id = %id, "Review created");
        Ok(id)
    }

    async fn list_reviews(&self, film_id: FilmId) -> Result<Vec<Review>, ReviewError> {
        self.repository.list_by_film(film_id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::review::models::Rating;
    use crate::domain::user::models::UserId;

    mock! {
        pub TestReviewRepository {}

        #[async_trait]
        impl ReviewRepository for TestReviewRepository {
            async fn create(&self, review: CreateReviewCommand) -> Result<ReviewId, ReviewError>;
            async fn list_by_film(&self, film_id: FilmId) -> Result<Vec<Review>, ReviewError>;
        }
    }

    #[tokio::test]
    async fn test_create_review_returns_id() {
        let mut repository = MockTestReviewRepository::new();
        repository
            .expect_create()
            .withf(|review| review.film_id == FilmId(1) && review.user_id == UserId(7))
            .times(1)
            .returning(|_| Ok(ReviewId(3)));

        let service = ReviewService::new(Arc::new(repository));

        let command = CreateReviewCommand {
            film_id: FilmId(1),
            user_id: UserId(7),
            rating: Rating::new(8).unwrap(),
            comment: "Great movie".to_string(),
        };

        let id = service.create_review(command).await.expect("Create failed");
        assert_eq!(id, ReviewId(3));
    }

    #[tokio::test]
    async fn test_create_review_unknown_film() {
        let mut repository = MockTestReviewRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|review| Err(ReviewError::FilmNotFound(review.film_id.to_string())));

        let service = ReviewService::new(Arc::new(repository));

        let command = CreateReviewCommand {
            film_id: FilmId(99),
            user_id: UserId(7),
            rating: Rating::new(8).unwrap(),
            comment: String::new(),
        };

        let result = service.create_review(command).await;
        assert!(matches!(result, Err(ReviewError::FilmNotFound(_))));
    }

    #[tokio::test]
    async fn test_list_reviews() {
        let mut repository = MockTestReviewRepository::new();
        repository
            .expect_list_by_film()
            .withf(|film_id| *film_id == FilmId(1))
            .times(1)
            .returning(|_| {
                Ok(vec![Review {
                    id: ReviewId(1),
                    film_id: FilmId(1),
                    user_id: UserId(7),
                    rating: Rating::new(9).unwrap(),
                    comment: "Loved it".to_string(),
                    created_at: Utc::now(),
                }])
            });

        let service = ReviewService::new(Arc::new(repository));

        let reviews = service.list_reviews(FilmId(1)).await.expect("List failed");
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].rating.value(), 9);
    }
}
