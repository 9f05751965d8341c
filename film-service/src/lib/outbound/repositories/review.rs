use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::film::models::FilmId;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::CreateReviewCommand;
use crate::domain::review::models::Rating;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewId;
use crate::domain::review::ports::ReviewRepository;
use crate::domain::user::models::UserId;

pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_review(row: &sqlx::postgres::PgRow) -> Result<Review, ReviewError> {
    let get = |e: sqlx::Error| ReviewError::DatabaseError(e.to_string());
    Ok(Review {
        id: ReviewId(row.try_get("id").map_err(get)?),
        film_id: FilmId(row.try_get("film_id").map_err(get)?),
        user_id: UserId(row.try_get("user_id").map_err(get)?),
        rating: Rating::new(row.try_get("rating").map_err(get)?)?,
        comment: row.try_get("comment").map_err(get)?,
        created_at: row.try_get("created_at").map_err(get)?,
    })
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn create(&self, review: CreateReviewCommand) -> Result<ReviewId, ReviewError> {
        let row = sqlx::query(
            r#"
            INSERT INTO reviews (film_id, user_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(review.film_id.0)
        .bind(review.user_id.0)
        .bind(review.rating.value())
        .bind(&review.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // Dangling film id surfaces as an FK violation.
                if db_err.is_foreign_key_violation() {
                    return ReviewError::FilmNotFound(review.film_id.to_string());
                }
            }
            ReviewError::DatabaseError(e.to_string())
        })?;

        let id: i32 = row
            .try_get("id")
            .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        Ok(ReviewId(id))
    }

    async fn list_by_film(&self, film_id: FilmId) -> Result<Vec<Review>, ReviewError> {
        let rows = sqlx::query(
            r#"
            SELECT id, film_id, user_id, rating, comment, created_at
            FROM reviews
            WHERE film_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(film_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        rows.iter().map(row_to_review).collect()
    }
}
