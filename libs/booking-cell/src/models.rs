// libs/booking-cell/src/models.rs
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shared_models::RepositoryError;
use uuid::Uuid;

/// A persisted booking occupying the half-open interval
/// `[start_time, end_time)` on the clinic calendar.
///
/// Times are wall-clock values; callers localize before they reach this
/// layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub work_id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// Booking request before the store has assigned an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub customer_id: Uuid,
    pub work_id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// A free candidate interval on the booking grid. Never persisted; built
/// per query and discarded with the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// One weekday's free sessions, ascending by start time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub available_sessions: Vec<Session>,
}

/// One weekday's existing bookings, ascending by start time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayBookings {
    pub date: NaiveDate,
    pub bookings: Vec<Booking>,
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Date was before today!")]
    PastDate,

    #[error("No entity found with id {0}!")]
    NotFound(Uuid),

    #[error("Duration must be divisible by 15")]
    InvalidDuration,

    #[error("Invalid start time!")]
    InvalidStartTime,

    #[error("Invalid end time!")]
    InvalidEndTime,

    #[error("End before start!")]
    InvalidRange,

    #[error(transparent)]
    Upstream(#[from] RepositoryError),
}
