use std::fmt;

use chrono::DateTime;
use chrono::Utc;

/// Film catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    pub id: FilmId,
    pub title: String,
    pub description: String,
    pub release_date: DateTime<Utc>,
    pub rating: f32,
    pub created_at: DateTime<Utc>,
}

/// Film unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilmId(pub i32);

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a film. Rating starts at the storage default.
#[derive(Debug, Clone)]
pub struct CreateFilmCommand {
    pub title: String,
    pub description: String,
    pub release_date: DateTime<Utc>,
}
