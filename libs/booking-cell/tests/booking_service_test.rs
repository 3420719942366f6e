mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{Datelike, Duration, Local, NaiveDate};
use uuid::Uuid;

use booking_cell::models::{Booking, BookingError, NewBooking};
use booking_cell::services::booking::BookingService;
use booking_cell::services::schedule;

use common::{massage_work, off_grid_work, InMemoryBookingRepository, InMemoryWorkRepository};

/// Today, rolled to Monday when the test runs on a weekend, so the
/// reference date always lands inside the week being queried.
fn reference_date() -> NaiveDate {
    schedule::normalize_weekend(Local::now().date_naive())
}

fn seeded_bookings(date: NaiveDate, work_id: Uuid, customer_id: Uuid) -> Vec<Booking> {
    vec![
        Booking {
            id: Uuid::new_v4(),
            customer_id,
            work_id,
            start_time: date.and_hms_opt(9, 45, 0).unwrap(),
            end_time: date.and_hms_opt(10, 30, 0).unwrap(),
        },
        Booking {
            id: Uuid::new_v4(),
            customer_id,
            work_id,
            start_time: date.and_hms_opt(11, 0, 0).unwrap(),
            end_time: date.and_hms_opt(11, 30, 0).unwrap(),
        },
    ]
}

struct Fixture {
    service: BookingService,
    bookings: Arc<InMemoryBookingRepository>,
    work_id: Uuid,
    customer_id: Uuid,
    date: NaiveDate,
}

fn fixture_with_bookings() -> Fixture {
    let date = reference_date();
    let work_id = Uuid::new_v4();
    let customer_id = Uuid::new_v4();

    let bookings = Arc::new(InMemoryBookingRepository::with_bookings(seeded_bookings(
        date,
        work_id,
        customer_id,
    )));
    let works = Arc::new(InMemoryWorkRepository::with_works(vec![massage_work(work_id)]));

    Fixture {
        service: BookingService::new(bookings.clone(), works),
        bookings,
        work_id,
        customer_id,
        date,
    }
}

#[tokio::test]
async fn available_sessions_skips_booked_intervals() {
    let fx = fixture_with_bookings();

    let week = fx
        .service
        .available_sessions(fx.date, fx.work_id)
        .await
        .unwrap();

    assert_eq!(week.len(), 5);
    assert!(fx.bookings.fetch_count() >= 5);

    let today_index = fx.date.weekday().num_days_from_monday() as usize;
    let today = &week[today_index];
    assert_eq!(today.date, fx.date);

    let sessions = &today.available_sessions;
    assert_eq!(sessions.len(), 21);
    assert_eq!(sessions[0].start_time, fx.date.and_hms_opt(9, 0, 0).unwrap());
    assert_eq!(sessions[1].start_time, fx.date.and_hms_opt(11, 30, 0).unwrap());
    assert_eq!(
        sessions.last().unwrap().start_time,
        fx.date.and_hms_opt(16, 15, 0).unwrap()
    );
}

#[tokio::test]
async fn available_sessions_returns_five_monday_first_entries() {
    let fx = fixture_with_bookings();

    let week = fx
        .service
        .available_sessions(fx.date, fx.work_id)
        .await
        .unwrap();

    assert_eq!(week.len(), 5);
    assert_eq!(week[0].date.weekday().num_days_from_monday(), 0);
    for pair in week.windows(2) {
        assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
    }
}

#[tokio::test]
async fn available_sessions_rejects_past_date_before_any_lookup() {
    let fx = fixture_with_bookings();
    let last_year = fx.date - Duration::days(365);

    let result = fx.service.available_sessions(last_year, fx.work_id).await;

    assert_matches!(result, Err(BookingError::PastDate));
    assert_eq!(fx.bookings.fetch_count(), 0);
}

#[tokio::test]
async fn available_sessions_rejects_off_grid_duration() {
    let date = reference_date();
    let work_id = Uuid::new_v4();
    let bookings = Arc::new(InMemoryBookingRepository::default());
    let works = Arc::new(InMemoryWorkRepository::with_works(vec![off_grid_work(work_id)]));
    let service = BookingService::new(bookings.clone(), works);

    let result = service.available_sessions(date, work_id).await;

    assert_matches!(result, Err(BookingError::InvalidDuration));
    assert_eq!(bookings.fetch_count(), 0);
}

#[tokio::test]
async fn available_sessions_rejects_unknown_work() {
    let fx = fixture_with_bookings();
    let unknown = Uuid::new_v4();

    let result = fx.service.available_sessions(fx.date, unknown).await;

    assert_matches!(result, Err(BookingError::NotFound(id)) if id == unknown);
}

#[tokio::test]
async fn save_booking_assigns_id() {
    let fx = fixture_with_bookings();

    let booking = fx
        .service
        .save_booking(NewBooking {
            customer_id: fx.customer_id,
            work_id: fx.work_id,
            start_time: fx.date.and_hms_opt(13, 0, 0).unwrap(),
            end_time: fx.date.and_hms_opt(13, 45, 0).unwrap(),
        })
        .await
        .unwrap();

    assert_eq!(fx.bookings.save_count(), 1);
    assert_eq!(booking.customer_id, fx.customer_id);
    assert_eq!(booking.start_time, fx.date.and_hms_opt(13, 0, 0).unwrap());
}

#[tokio::test]
async fn save_booking_rejects_unaligned_start() {
    let fx = fixture_with_bookings();

    let result = fx
        .service
        .save_booking(NewBooking {
            customer_id: fx.customer_id,
            work_id: fx.work_id,
            start_time: fx.date.and_hms_opt(9, 43, 0).unwrap(),
            end_time: fx.date.and_hms_opt(10, 45, 0).unwrap(),
        })
        .await;

    let err = result.unwrap_err();
    assert_matches!(&err, BookingError::InvalidStartTime);
    assert_eq!(err.to_string(), "Invalid start time!");
    assert_eq!(fx.bookings.save_count(), 0);
}

#[tokio::test]
async fn save_booking_rejects_unaligned_end() {
    let fx = fixture_with_bookings();

    let result = fx
        .service
        .save_booking(NewBooking {
            customer_id: fx.customer_id,
            work_id: fx.work_id,
            start_time: fx.date.and_hms_opt(9, 45, 0).unwrap(),
            end_time: fx.date.and_hms_opt(10, 43, 0).unwrap(),
        })
        .await;

    let err = result.unwrap_err();
    assert_matches!(&err, BookingError::InvalidEndTime);
    assert_eq!(err.to_string(), "Invalid end time!");
    assert_eq!(fx.bookings.save_count(), 0);
}

#[tokio::test]
async fn save_booking_rejects_end_before_start() {
    let fx = fixture_with_bookings();

    let result = fx
        .service
        .save_booking(NewBooking {
            customer_id: fx.customer_id,
            work_id: fx.work_id,
            start_time: fx.date.and_hms_opt(10, 45, 0).unwrap(),
            end_time: fx.date.and_hms_opt(9, 45, 0).unwrap(),
        })
        .await;

    let err = result.unwrap_err();
    assert_matches!(&err, BookingError::InvalidRange);
    assert_eq!(err.to_string(), "End before start!");
    assert_eq!(fx.bookings.save_count(), 0);
}

#[tokio::test]
async fn bookings_for_week_groups_by_weekday() {
    let fx = fixture_with_bookings();

    let week = fx.service.bookings_for_week(fx.date).await.unwrap();

    assert_eq!(week.len(), 5);
    assert_eq!(week[0].date.weekday().num_days_from_monday(), 0);

    let today_index = fx.date.weekday().num_days_from_monday() as usize;
    assert_eq!(week[today_index].bookings.len(), 2);

    let total: usize = week.iter().map(|day| day.bookings.len()).sum();
    assert_eq!(total, 2);
}

#[tokio::test]
async fn customer_bookings_are_sorted_by_start() {
    let fx = fixture_with_bookings();

    let bookings = fx.service.customer_bookings(fx.customer_id).await.unwrap();

    assert_eq!(bookings.len(), 2);
    assert!(bookings[0].start_time < bookings[1].start_time);
}

#[tokio::test]
async fn delete_booking_reports_missing_id() {
    let fx = fixture_with_bookings();
    let missing = Uuid::new_v4();

    let result = fx.service.delete_booking(missing).await;

    assert_matches!(result, Err(BookingError::NotFound(id)) if id == missing);
}

#[tokio::test]
async fn delete_booking_removes_existing_row() {
    let fx = fixture_with_bookings();
    let existing = fx.service.customer_bookings(fx.customer_id).await.unwrap()[0].id;

    fx.service.delete_booking(existing).await.unwrap();

    let remaining = fx.service.customer_bookings(fx.customer_id).await.unwrap();
    assert_eq!(remaining.len(), 1);
}
