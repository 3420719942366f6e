pub mod handlers;
pub mod models;
pub mod repository;
pub mod router;
pub mod services;

pub use models::{Booking, BookingError, DayAvailability, DayBookings, NewBooking, Session};
pub use repository::{BookingRepository, SupabaseBookingRepository};
pub use services::booking::BookingService;
