// libs/booking-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::AppError;

use crate::models::{BookingError, NewBooking};
use crate::services::booking::BookingService;

#[derive(Debug, Deserialize)]
pub struct AvailableSessionsQuery {
    pub date: NaiveDate,
    pub work_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    pub date: NaiveDate,
}

#[axum::debug_handler]
pub async fn get_available_sessions(
    State(service): State<Arc<BookingService>>,
    Query(query): Query<AvailableSessionsQuery>,
) -> Result<Json<Value>, AppError> {
    let week = service
        .available_sessions(query.date, query.work_id)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(json!({ "week": week })))
}

#[axum::debug_handler]
pub async fn create_booking(
    State(service): State<Arc<BookingService>>,
    Json(request): Json<NewBooking>,
) -> Result<Json<Value>, AppError> {
    let booking = service.save_booking(request).await.map_err(map_booking_error)?;

    Ok(Json(json!({
        "success": true,
        "booking": booking,
        "message": "Booking created successfully"
    })))
}

#[axum::debug_handler]
pub async fn get_weekly_bookings(
    State(service): State<Arc<BookingService>>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<Value>, AppError> {
    let week = service
        .bookings_for_week(query.date)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(json!({ "week": week })))
}

#[axum::debug_handler]
pub async fn get_customer_bookings(
    State(service): State<Arc<BookingService>>,
    Path(customer_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let bookings = service
        .customer_bookings(customer_id)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(json!({ "bookings": bookings })))
}

#[axum::debug_handler]
pub async fn delete_booking(
    State(service): State<Arc<BookingService>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    service.delete_booking(booking_id).await.map_err(map_booking_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Booking deleted successfully"
    })))
}

fn map_booking_error(error: BookingError) -> AppError {
    match error {
        BookingError::NotFound(_) => AppError::NotFound(error.to_string()),
        BookingError::Upstream(e) => AppError::Database(e.to_string()),
        _ => AppError::BadRequest(error.to_string()),
    }
}
