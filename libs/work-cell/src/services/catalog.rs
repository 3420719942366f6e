// libs/work-cell/src/services/catalog.rs
use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{NewWork, UpdateWorkRequest, Work, WorkError};
use crate::repository::WorkRepository;

/// CRUD over the treatment catalog with input validation in front of the
/// repository. The store is only reached once a request is known valid.
pub struct WorkService {
    works: Arc<dyn WorkRepository>,
}

impl WorkService {
    pub fn new(works: Arc<dyn WorkRepository>) -> Self {
        Self { works }
    }

    pub async fn create_work(&self, work: NewWork) -> Result<Work, WorkError> {
        validate_work_fields(&work.title, &work.description, work.duration_minutes, work.price)?;

        let created = self.works.create_work(work).await?;
        info!("Work {} created", created.id);
        Ok(created)
    }

    pub async fn all_works(&self) -> Result<Vec<Work>, WorkError> {
        Ok(self.works.all_works().await?)
    }

    pub async fn work_by_id(&self, work_id: Uuid) -> Result<Work, WorkError> {
        debug!("Fetching work {}", work_id);

        self.works
            .work_by_id(work_id)
            .await?
            .ok_or(WorkError::NotFound(work_id))
    }

    pub async fn update_work(&self, work_id: Uuid, request: UpdateWorkRequest) -> Result<Work, WorkError> {
        if request.id != work_id {
            return Err(WorkError::IdMismatch);
        }
        validate_work_fields(
            &request.title,
            &request.description,
            request.duration_minutes,
            request.price,
        )?;

        let work = Work {
            id: request.id,
            title: request.title,
            description: request.description,
            duration_minutes: request.duration_minutes,
            price: request.price,
            image_url: request.image_url,
        };

        let updated = self.works.update_work(work).await?;
        info!("Work {} updated", updated.id);
        Ok(updated)
    }

    pub async fn delete_work(&self, work_id: Uuid) -> Result<(), WorkError> {
        if !self.works.delete_work(work_id).await? {
            return Err(WorkError::NotFound(work_id));
        }
        info!("Work {} deleted", work_id);
        Ok(())
    }
}

fn validate_work_fields(
    title: &str,
    description: &str,
    duration_minutes: i32,
    price: f64,
) -> Result<(), WorkError> {
    if title.trim().is_empty() {
        return Err(WorkError::MissingTitle);
    }
    if description.trim().is_empty() {
        return Err(WorkError::MissingDescription);
    }
    if duration_minutes <= 0 {
        return Err(WorkError::InvalidDuration);
    }
    if price <= 0.0 {
        return Err(WorkError::InvalidPrice);
    }
    Ok(())
}
