use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::film::models::FilmId;
use crate::domain::review::errors::RatingError;
use crate::domain::user::models::UserId;

/// Review left by a user on a film.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub film_id: FilmId,
    pub user_id: UserId,
    pub rating: Rating,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Review unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewId(pub i32);

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Review score value type, 1 to 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(i32);

impl Rating {
    const MIN: i32 = 1;
    const MAX: i32 = 10;

    /// Create a validated rating.
    ///
    /// # Errors
    /// * `OutOfRange` - Value outside 1..=10
    pub fn new(value: i32) -> Result<Self, RatingError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            })
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Command to create a review.
///
/// `user_id` comes from the verified request identity, never from the
/// request body.
#[derive(Debug, Clone)]
pub struct CreateReviewCommand {
    pub film_id: FilmId,
    pub user_id: UserId,
    pub rating: Rating,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(1).is_ok());
        assert!(Rating::new(10).is_ok());
        assert!(matches!(
            Rating::new(0),
            Err(RatingError::OutOfRange { .. })
        ));
        assert!(matches!(
            Rating::new(11),
            Err(RatingError::OutOfRange { .. })
        ));
    }
}
