use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::film::models::CreateFilmCommand;
use crate::domain::film::ports::FilmServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_film(
    State(state): State<AppState>,
    Json(body): Json<CreateFilmRequest>,
) -> Result<ApiSuccess<CreateFilmResponseData>, ApiError> {
    let command = CreateFilmCommand {
        title: body.title,
        description: body.description,
        release_date: body.release_date,
    };

    state
        .film_service
        .create_film(command)
        .await
        .map_err(ApiError::from)
        .map(|id| ApiSuccess::new(StatusCode::CREATED, CreateFilmResponseData { id: id.0 }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateFilmRequest {
    title: String,
    description: String,
    release_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateFilmResponseData {
    pub id: i32,
}
