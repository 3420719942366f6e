// libs/booking-cell/src/services/schedule.rs
//
// Pure calendar arithmetic behind availability queries: the candidate
// session grid for a business day, half-open overlap filtering against
// existing bookings, and work-week resolution.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::models::{Booking, Session};

/// Step between candidate start times, and the alignment bookings must
/// respect.
pub const GRID_MINUTES: i64 = 15;

/// Number of bookable weekdays in a work week.
pub const WEEKDAYS: usize = 5;

fn open_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap()
}

fn close_time() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).unwrap()
}

/// True when `minutes` is a valid work duration for the grid: positive and
/// divisible by 15.
pub fn duration_on_grid(minutes: i32) -> bool {
    minutes > 0 && minutes as i64 % GRID_MINUTES == 0
}

/// True when an instant sits on the 15-minute grid.
pub fn grid_aligned(instant: NaiveDateTime) -> bool {
    instant.minute() as i64 % GRID_MINUTES == 0
}

/// Candidate start instants for one business day: every grid step `t` with
/// `t >= open` and `t + duration <= close`, ascending. Lazy and regenerated
/// per call; empty when the duration does not fit the window at all.
pub fn session_starts(date: NaiveDate, duration_minutes: i32) -> impl Iterator<Item = NaiveDateTime> {
    let open = date.and_time(open_time());
    let close = date.and_time(close_time());
    let duration = Duration::minutes(duration_minutes as i64);

    (0i64..)
        .map(move |step| open + Duration::minutes(step * GRID_MINUTES))
        .take_while(move |start| *start + duration <= close)
}

/// Half-open interval intersection. Intervals that only touch at a
/// boundary do not overlap, so a session may end exactly when a booking
/// starts and vice versa.
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// The candidate grid for `date` with every session that intersects an
/// existing booking removed. Order-preserving and idempotent.
pub fn free_sessions(date: NaiveDate, duration_minutes: i32, booked: &[Booking]) -> Vec<Session> {
    let duration = Duration::minutes(duration_minutes as i64);

    session_starts(date, duration_minutes)
        .map(|start| Session {
            start_time: start,
            end_time: start + duration,
        })
        .filter(|session| {
            !booked.iter().any(|booking| {
                overlaps(
                    session.start_time,
                    session.end_time,
                    booking.start_time,
                    booking.end_time,
                )
            })
        })
        .collect()
}

/// Monday of the week containing `date` (Monday=0 .. Sunday=6).
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Weekend reference dates plan against the following week: Saturday rolls
/// forward two days and Sunday one, both landing on Monday. Weekdays pass
/// through unchanged.
pub fn normalize_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// The five weekdays, Monday first, of the work week containing `date`
/// (after weekend normalization).
pub fn week_days(date: NaiveDate) -> [NaiveDate; WEEKDAYS] {
    let monday = monday_of(normalize_weekend(date));
    [
        monday,
        monday + Duration::days(1),
        monday + Duration::days(2),
        monday + Duration::days(3),
        monday + Duration::days(4),
    ]
}
