use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::film::models::FilmId;
use crate::domain::review::models::Review;
use crate::domain::review::ports::ReviewServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_reviews(
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<ApiSuccess<Vec<ReviewData>>, ApiError> {
    state
        .review_service
        .list_reviews(FilmId(film_id))
        .await
        .map_err(ApiError::from)
        .map(|reviews| {
            let data = reviews.iter().map(ReviewData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewData {
    pub id: i32,
    pub film_id: i32,
    pub user_id: i32,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Review> for ReviewData {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.0,
            film_id: review.film_id.0,
            user_id: review.user_id.0,
            rating: review.rating.value(),
            comment: review.comment.clone(),
            created_at: review.created_at,
        }
    }
}
