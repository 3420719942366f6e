// libs/work-cell/src/models.rs
use serde::{Deserialize, Serialize};
use shared_models::RepositoryError;
use uuid::Uuid;

/// A bookable treatment offered by the clinic.
///
/// `duration_minutes` drives the availability grid; the booking paths
/// require it to be a positive multiple of 15, which is enforced where the
/// duration is consumed rather than at catalog write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub price: f64,
    pub image_url: String,
}

/// Catalog entry as submitted by an editor; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWork {
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub price: f64,
    pub image_url: String,
}

/// Full replacement body for `PUT /works/{work_id}`. The embedded id must
/// match the path parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWorkRequest {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub price: f64,
    pub image_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum WorkError {
    #[error("No entity found with id {0}!")]
    NotFound(Uuid),

    #[error("Title empty or null!")]
    MissingTitle,

    #[error("Description empty or null!")]
    MissingDescription,

    #[error("Duration cannot be 0 or less!")]
    InvalidDuration,

    #[error("Price cannot be 0 or less!")]
    InvalidPrice,

    #[error("Id mismatch")]
    IdMismatch,

    #[error(transparent)]
    Upstream(#[from] RepositoryError),
}
