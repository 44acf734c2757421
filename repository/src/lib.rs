pub mod error;
pub mod movie;

pub use error::RepositoryError;
pub use movie::{MovieRepository, MovieStore};
