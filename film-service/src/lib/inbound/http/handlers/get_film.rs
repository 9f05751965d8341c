use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::film::models::Film;
use crate::domain::film::models::FilmId;
use crate::domain::film::ports::FilmServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_film(
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<ApiSuccess<FilmData>, ApiError> {
    state
        .film_service
        .get_film(FilmId(film_id))
        .await
        .map_err(ApiError::from)
        .map(|ref film| ApiSuccess::new(StatusCode::OK, film.into()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmData {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub release_date: DateTime<Utc>,
    pub rating: f32,
    pub created_at: DateTime<Utc>,
}

impl From<&Film> for FilmData {
    fn from(film: &Film) -> Self {
        Self {
            id: film.id.0,
            title: film.title.clone(),
            description: film.description.clone(),
            release_date: film.release_date,
            rating: film.rating,
            created_at: film.created_at,
        }
    }
}
