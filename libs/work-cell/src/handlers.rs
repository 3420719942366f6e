// libs/work-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::AppError;

use crate::models::{NewWork, UpdateWorkRequest, WorkError};
use crate::services::catalog::WorkService;

#[axum::debug_handler]
pub async fn create_work(
    State(service): State<Arc<WorkService>>,
    Json(request): Json<NewWork>,
) -> Result<Json<Value>, AppError> {
    let work = service.create_work(request).await.map_err(map_work_error)?;

    Ok(Json(json!({
        "success": true,
        "work": work,
        "message": "Work created successfully"
    })))
}

#[axum::debug_handler]
pub async fn get_all_works(
    State(service): State<Arc<WorkService>>,
) -> Result<Json<Value>, AppError> {
    let works = service.all_works().await.map_err(map_work_error)?;

    Ok(Json(json!({ "works": works })))
}

#[axum::debug_handler]
pub async fn get_work(
    State(service): State<Arc<WorkService>>,
    Path(work_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let work = service.work_by_id(work_id).await.map_err(map_work_error)?;

    Ok(Json(json!(work)))
}

#[axum::debug_handler]
pub async fn update_work(
    State(service): State<Arc<WorkService>>,
    Path(work_id): Path<Uuid>,
    Json(request): Json<UpdateWorkRequest>,
) -> Result<Json<Value>, AppError> {
    let work = service
        .update_work(work_id, request)
        .await
        .map_err(map_work_error)?;

    Ok(Json(json!({
        "success": true,
        "work": work,
        "message": "Work updated successfully"
    })))
}

#[axum::debug_handler]
pub async fn delete_work(
    State(service): State<Arc<WorkService>>,
    Path(work_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    service.delete_work(work_id).await.map_err(map_work_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Work deleted successfully"
    })))
}

fn map_work_error(error: WorkError) -> AppError {
    match error {
        WorkError::NotFound(_) => AppError::NotFound(error.to_string()),
        WorkError::Upstream(e) => AppError::Database(e.to_string()),
        _ => AppError::BadRequest(error.to_string()),
    }
}
