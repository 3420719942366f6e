// libs/work-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers;
use crate::services::catalog::WorkService;

pub fn work_routes(service: Arc<WorkService>) -> Router {
    Router::new()
        .route("/", post(handlers::create_work))
        .route("/", get(handlers::get_all_works))
        .route("/{work_id}", get(handlers::get_work))
        .route("/{work_id}", put(handlers::update_work))
        .route("/{work_id}", delete(handlers::delete_work))
        .with_state(service)
}
