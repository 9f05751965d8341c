pub mod film;
pub mod review;
pub mod user;

pub use film::PostgresFilmRepository;
pub use review::PostgresReviewRepository;
pub use user::PostgresUserRepository;
