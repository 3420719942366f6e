// libs/booking-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers;
use crate::services::booking::BookingService;

pub fn booking_routes(service: Arc<BookingService>) -> Router {
    Router::new()
        .route("/available-sessions", get(handlers::get_available_sessions))
        .route("/", post(handlers::create_booking))
        .route("/week", get(handlers::get_weekly_bookings))
        .route("/customers/{customer_id}", get(handlers::get_customer_bookings))
        .route("/{booking_id}", delete(handlers::delete_booking))
        .with_state(service)
}
