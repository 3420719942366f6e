use std::sync::Arc;

use axum::{routing::get, Router};

use booking_cell::router::booking_routes;
use booking_cell::services::booking::BookingService;
use work_cell::router::work_routes;
use work_cell::services::catalog::WorkService;

pub fn create_router(
    work_service: Arc<WorkService>,
    booking_service: Arc<BookingService>,
) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic booking API is running!" }))
        .nest("/works", work_routes(work_service))
        .nest("/bookings", booking_routes(booking_service))
}
