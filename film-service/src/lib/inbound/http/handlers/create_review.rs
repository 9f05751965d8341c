use axum::extract::Extension;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::film::models::FilmId;
use crate::domain::review::models::CreateReviewCommand;
use crate::domain::review::models::Rating;
use crate::domain::review::ports::ReviewServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_review(
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateReviewRequest>,
) -> Result<ApiSuccess<CreateReviewResponseData>, ApiError> {
    let rating =
        Rating::new(body.rating).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    // Author comes from the verified identity, not the body.
    let command = CreateReviewCommand {
        film_id: FilmId(film_id),
        user_id: user.user_id,
        rating,
        comment: body.comment,
    };

    state
        .review_service
        .create_review(command)
        .await
        .map_err(ApiError::from)
        .map(|id| ApiSuccess::new(StatusCode::CREATED, CreateReviewResponseData { id: id.0 }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateReviewRequest {
    rating: i32,
    #[serde(default)]
    comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateReviewResponseData {
    pub id: i32,
}
