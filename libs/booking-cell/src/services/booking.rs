// libs/booking-cell/src/services/booking.rs
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};
use uuid::Uuid;

use work_cell::models::Work;
use work_cell::repository::WorkRepository;

use crate::models::{Booking, BookingError, DayAvailability, DayBookings, NewBooking};
use crate::repository::BookingRepository;
use crate::services::schedule;

/// Scheduling entry points: weekly availability, booking validation and
/// creation, and weekly booking listings.
///
/// Repositories are injected as trait objects so tests can run against
/// in-memory fakes while production talks to the store.
pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
    works: Arc<dyn WorkRepository>,
}

impl BookingService {
    pub fn new(bookings: Arc<dyn BookingRepository>, works: Arc<dyn WorkRepository>) -> Self {
        Self { bookings, works }
    }

    /// Free sessions for every weekday of the work week containing `date`,
    /// Monday first, always five entries.
    ///
    /// Validation happens before any repository call: a past reference
    /// date is rejected outright, then the work is resolved and its
    /// duration checked against the grid.
    pub async fn available_sessions(
        &self,
        date: NaiveDate,
        work_id: Uuid,
    ) -> Result<Vec<DayAvailability>, BookingError> {
        if date < Local::now().date_naive() {
            warn!("Availability requested for past date {}", date);
            return Err(BookingError::PastDate);
        }

        let work = self
            .works
            .work_by_id(work_id)
            .await?
            .ok_or(BookingError::NotFound(work_id))?;

        if !schedule::duration_on_grid(work.duration_minutes) {
            return Err(BookingError::InvalidDuration);
        }

        let mut week = Vec::with_capacity(schedule::WEEKDAYS);
        for day in schedule::week_days(date) {
            week.push(self.day_availability(day, &work).await?);
        }

        debug!(
            "Computed availability for work {} across week of {}",
            work_id, week[0].date
        );
        Ok(week)
    }

    /// Availability for a single calendar date. Re-asserts the duration
    /// invariant even though the weekly entry point already checked it.
    async fn day_availability(
        &self,
        date: NaiveDate,
        work: &Work,
    ) -> Result<DayAvailability, BookingError> {
        if !schedule::duration_on_grid(work.duration_minutes) {
            return Err(BookingError::InvalidDuration);
        }

        let booked = self.bookings.bookings_on_date(date).await?;

        Ok(DayAvailability {
            date,
            available_sessions: schedule::free_sessions(date, work.duration_minutes, &booked),
        })
    }

    /// Validate a booking request and hand it to the store, which assigns
    /// the id. Grid alignment and ordering are checked here; overlap
    /// against existing bookings is the store's concern on its write path.
    pub async fn save_booking(&self, request: NewBooking) -> Result<Booking, BookingError> {
        if !schedule::grid_aligned(request.start_time) {
            return Err(BookingError::InvalidStartTime);
        }
        if !schedule::grid_aligned(request.end_time) {
            return Err(BookingError::InvalidEndTime);
        }
        if request.end_time <= request.start_time {
            return Err(BookingError::InvalidRange);
        }

        let booking = self.bookings.create_booking(request).await?;
        info!("Booking {} created for customer {}", booking.id, booking.customer_id);
        Ok(booking)
    }

    /// Existing bookings grouped by weekday for the same Monday-first work
    /// week, always five entries, possibly with empty days.
    pub async fn bookings_for_week(&self, date: NaiveDate) -> Result<Vec<DayBookings>, BookingError> {
        let mut week = Vec::with_capacity(schedule::WEEKDAYS);
        for day in schedule::week_days(date) {
            let bookings = self.bookings.bookings_on_date(day).await?;
            week.push(DayBookings { date: day, bookings });
        }
        Ok(week)
    }

    /// All bookings made by one customer, ascending by start time.
    pub async fn customer_bookings(&self, customer_id: Uuid) -> Result<Vec<Booking>, BookingError> {
        Ok(self.bookings.bookings_for_customer(customer_id).await?)
    }

    pub async fn delete_booking(&self, booking_id: Uuid) -> Result<(), BookingError> {
        if !self.bookings.delete_booking(booking_id).await? {
            return Err(BookingError::NotFound(booking_id));
        }
        info!("Booking {} deleted", booking_id);
        Ok(())
    }
}
