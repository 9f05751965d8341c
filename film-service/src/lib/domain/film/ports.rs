use async_trait::async_trait;

use crate::domain::film::errors::FilmError;
use crate::domain::film::models::CreateFilmCommand;
use crate::domain::film::models::Film;
use crate::domain::film::models::FilmId;

/// Port for film catalog operations.
#[async_trait]
pub trait FilmServicePort: Send + Sync + 'static {
    /// Create a new film and return its identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_film(&self, command: CreateFilmCommand) -> Result<FilmId, FilmError>;

    /// Retrieve a film by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Film does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_film(&self, id: FilmId) -> Result<Film, FilmError>;

    /// Search films by title or description substring.
    ///
    /// An empty query returns the whole catalog.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn search_films(&self, query: &str) -> Result<Vec<Film>, FilmError>;
}

/// Persistence operations for the film aggregate.
#[async_trait]
pub trait FilmRepository: Send + Sync + 'static {
    /// Persist a new film and return its identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, film: CreateFilmCommand) -> Result<FilmId, FilmError>;

    /// Retrieve a film by identifier; `None` when absent.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: FilmId) -> Result<Option<Film>, FilmError>;

    /// Case-insensitive substring search over title and description.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn search(&self, query: &str) -> Result<Vec<Film>, FilmError>;
}
