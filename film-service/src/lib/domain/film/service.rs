use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::film::errors::FilmError;
use crate::domain::film::models::CreateFilmCommand;
use crate::domain::film::models::Film;
use crate::domain::film::models::FilmId;
use crate::domain::film::ports::FilmRepository;
use crate::domain::film::ports::FilmServicePort;

/// Domain service for the film catalog.
pub struct FilmService<FR>
where
    FR: FilmRepository,
{
    repository: Arc<FR>,
}

impl<FR> FilmService<FR>
where
    FR: FilmRepository,
{
    pub fn new(repository: Arc<FR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<FR> FilmServicePort for FilmService<FR>
where
    FR: FilmRepository,
{
    async fn create_film(&self, command: CreateFilmCommand) -> Result<FilmId, FilmError> {
        let id = self.repository.create(command).await?;
        tracing::info!(film_id = %id, "Film created");
        Ok(id)
    }

    async fn get_film(&self, id: FilmId) -> Result<Film, FilmError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(FilmError::NotFound(id.to_string()))
    }

    async fn search_films(&self, query: &str) -> Result<Vec<Film>, FilmError> {
        self.repository.search(query).await
    }
}
