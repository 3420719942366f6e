// libs/work-cell/src/repository.rs
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

use shared_database::SupabaseClient;
use shared_models::RepositoryError;

use crate::models::{NewWork, Work};

/// Catalog lookup contract consumed by the work and booking services.
///
/// Production wires in the Supabase-backed implementation; tests inject
/// in-memory fakes.
#[async_trait]
pub trait WorkRepository: Send + Sync {
    async fn create_work(&self, work: NewWork) -> Result<Work, RepositoryError>;

    async fn all_works(&self) -> Result<Vec<Work>, RepositoryError>;

    /// `Ok(None)` when no work exists with the given id.
    async fn work_by_id(&self, work_id: Uuid) -> Result<Option<Work>, RepositoryError>;

    async fn update_work(&self, work: Work) -> Result<Work, RepositoryError>;

    /// Returns whether a row was actually deleted.
    async fn delete_work(&self, work_id: Uuid) -> Result<bool, RepositoryError>;
}

pub struct SupabaseWorkRepository {
    supabase: Arc<SupabaseClient>,
}

impl SupabaseWorkRepository {
    pub fn new(supabase: Arc<SupabaseClient>) -> Self {
        Self { supabase }
    }

    fn representation_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));
        headers
    }
}

#[async_trait]
impl WorkRepository for SupabaseWorkRepository {
    async fn create_work(&self, work: NewWork) -> Result<Work, RepositoryError> {
        debug!("Creating work '{}'", work.title);

        let result: Vec<Work> = self
            .supabase
            .request_with_headers(
                Method::POST,
                "/rest/v1/works",
                None,
                Some(json!(work)),
                Some(Self::representation_headers()),
            )
            .await
            .map_err(RepositoryError::new)?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| RepositoryError::new(anyhow!("work insert returned no row")))
    }

    async fn all_works(&self) -> Result<Vec<Work>, RepositoryError> {
        let works: Vec<Work> = self
            .supabase
            .request(Method::GET, "/rest/v1/works?order=title.asc", None, None)
            .await
            .map_err(RepositoryError::new)?;

        Ok(works)
    }

    async fn work_by_id(&self, work_id: Uuid) -> Result<Option<Work>, RepositoryError> {
        let path = format!("/rest/v1/works?id=eq.{}", work_id);
        let result: Vec<Work> = self
            .supabase
            .request(Method::GET, &path, None, None)
            .await
            .map_err(RepositoryError::new)?;

        Ok(result.into_iter().next())
    }

    async fn update_work(&self, work: Work) -> Result<Work, RepositoryError> {
        debug!("Updating work {}", work.id);

        let path = format!("/rest/v1/works?id=eq.{}", work.id);
        let result: Vec<Work> = self
            .supabase
            .request_with_headers(
                Method::PATCH,
                &path,
                None,
                Some(json!(work)),
                Some(Self::representation_headers()),
            )
            .await
            .map_err(RepositoryError::new)?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| RepositoryError::new(anyhow!("work update returned no row")))
    }

    async fn delete_work(&self, work_id: Uuid) -> Result<bool, RepositoryError> {
        debug!("Deleting work {}", work_id);

        let path = format!("/rest/v1/works?id=eq.{}", work_id);
        let deleted: Vec<Value> = self
            .supabase
            .request_with_headers(
                Method::DELETE,
                &path,
                None,
                None,
                Some(Self::representation_headers()),
            )
            .await
            .map_err(RepositoryError::new)?;

        Ok(!deleted.is_empty())
    }
}
