use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::get_film::FilmData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::film::ports::FilmServicePort;
use crate::inbound::http::router::AppState;

pub async fn search_films(
    State(state): State<AppState>,
    Query(params): Query<SearchFilmsParams>,
) -> Result<ApiSuccess<Vec<FilmData>>, ApiError> {
    state
        .film_service
        .search_films(&params.query)
        .await
        .map_err(ApiError::from)
        .map(|films| {
            let data = films.iter().map(FilmData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}

/// Query parameters for film search; empty query lists everything.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchFilmsParams {
    #[serde(default)]
    query: String,
}
