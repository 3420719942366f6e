pub mod booking;
pub mod schedule;

pub use booking::BookingService;
