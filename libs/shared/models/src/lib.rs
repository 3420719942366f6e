pub mod error;
pub mod repository;

pub use error::AppError;
pub use repository::RepositoryError;
