use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::film::errors::FilmError;
use crate::domain::film::models::CreateFilmCommand;
use crate::domain::film::models::Film;
use crate::domain::film::models::FilmId;
use crate::domain::film::ports::FilmRepository;

pub struct PostgresFilmRepository {
    pool: PgPool,
}

impl PostgresFilmRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_film(row: &sqlx::postgres::PgRow) -> Result<Film, FilmError> {
    let get = |e: sqlx::Error| FilmError::DatabaseError(e.to_string());
    Ok(Film {
        id: FilmId(row.try_get("id").map_err(get)?),
        title: row.try_get("title").map_err(get)?,
        description: row.try_get("description").map_err(get)?,
        release_date: row.try_get("release_date").map_err(get)?,
        rating: row.try_get("rating").map_err(get)?,
        created_at: row.try_get("created_at").map_err(get)?,
    })
}

#[async_trait]
impl FilmRepository for PostgresFilmRepository {
    async fn create(&self, film: CreateFilmCommand) -> Result<FilmId, FilmError> {
        let row = sqlx::query(
            r#"
            INSERT INTO films (title, description, release_date)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&film.title)
        .bind(&film.description)
        .bind(film.release_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| FilmError::DatabaseError(e.to_string()))?;

        let id: i32 = row
            .try_get("id")
            .map_err(|e| FilmError::DatabaseError(e.to_string()))?;

        Ok(FilmId(id))
    }

    async fn find_by_id(&self, id: FilmId) -> Result<Option<Film>, FilmError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, release_date, rating, created_at
            FROM films
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| FilmError::DatabaseError(e.to_string()))?;

        row.as_ref().map(row_to_film).transpose()
    }

    async fn search(&self, query: &str) -> Result<Vec<Film>, FilmError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, release_date, rating, created_at
            FROM films
            WHERE title ILIKE '%' || $1 || '%' OR description ILIKE '%' || $1 || '%'
            ORDER BY created_at DESC
            "#,
        )
        .bind(query)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FilmError::DatabaseError(e.to_string()))?;

        rows.iter().map(row_to_film).collect()
    }
}
