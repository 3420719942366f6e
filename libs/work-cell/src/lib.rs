pub mod handlers;
pub mod models;
pub mod repository;
pub mod router;
pub mod services;

pub use models::{NewWork, UpdateWorkRequest, Work, WorkError};
pub use repository::{SupabaseWorkRepository, WorkRepository};
pub use services::catalog::WorkService;
