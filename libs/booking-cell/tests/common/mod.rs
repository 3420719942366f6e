// In-memory repository fakes standing in for the storage collaborators.
// Call counters let tests assert that validation failures never reach the
// store, mirroring the mock-verify style of the service tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use booking_cell::models::{Booking, NewBooking};
use booking_cell::repository::BookingRepository;
use shared_models::RepositoryError;
use work_cell::models::{NewWork, Work};
use work_cell::repository::WorkRepository;

#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: Mutex<Vec<Booking>>,
    pub fetch_calls: AtomicUsize,
    pub save_calls: AtomicUsize,
}

impl InMemoryBookingRepository {
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Mutex::new(bookings),
            ..Self::default()
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn bookings_on_date(&self, date: NaiveDate) -> Result<Vec<Booking>, RepositoryError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        let mut on_date: Vec<Booking> = self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.start_time.date() == date)
            .cloned()
            .collect();
        on_date.sort_by_key(|b| b.start_time);
        Ok(on_date)
    }

    async fn bookings_for_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<Booking>, RepositoryError> {
        let mut for_customer: Vec<Booking> = self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.customer_id == customer_id)
            .cloned()
            .collect();
        for_customer.sort_by_key(|b| b.start_time);
        Ok(for_customer)
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, RepositoryError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);

        let created = Booking {
            id: Uuid::new_v4(),
            customer_id: booking.customer_id,
            work_id: booking.work_id,
            start_time: booking.start_time,
            end_time: booking.end_time,
        };
        self.bookings.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_booking(&self, booking_id: Uuid) -> Result<bool, RepositoryError> {
        let mut bookings = self.bookings.lock().unwrap();
        let before = bookings.len();
        bookings.retain(|b| b.id != booking_id);
        Ok(bookings.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryWorkRepository {
    works: Mutex<Vec<Work>>,
}

impl InMemoryWorkRepository {
    pub fn with_works(works: Vec<Work>) -> Self {
        Self {
            works: Mutex::new(works),
        }
    }
}

#[async_trait]
impl WorkRepository for InMemoryWorkRepository {
    async fn create_work(&self, work: NewWork) -> Result<Work, RepositoryError> {
        let created = Work {
            id: Uuid::new_v4(),
            title: work.title,
            description: work.description,
            duration_minutes: work.duration_minutes,
            price: work.price,
            image_url: work.image_url,
        };
        self.works.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn all_works(&self) -> Result<Vec<Work>, RepositoryError> {
        Ok(self.works.lock().unwrap().clone())
    }

    async fn work_by_id(&self, work_id: Uuid) -> Result<Option<Work>, RepositoryError> {
        Ok(self
            .works
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == work_id)
            .cloned())
    }

    async fn update_work(&self, work: Work) -> Result<Work, RepositoryError> {
        let mut works = self.works.lock().unwrap();
        if let Some(existing) = works.iter_mut().find(|w| w.id == work.id) {
            *existing = work.clone();
        }
        Ok(work)
    }

    async fn delete_work(&self, work_id: Uuid) -> Result<bool, RepositoryError> {
        let mut works = self.works.lock().unwrap();
        let before = works.len();
        works.retain(|w| w.id != work_id);
        Ok(works.len() < before)
    }
}

/// A 45-minute treatment, valid for the booking grid.
pub fn massage_work(id: Uuid) -> Work {
    Work {
        id,
        title: "Massage - short".to_string(),
        description: "A short massage".to_string(),
        duration_minutes: 45,
        price: 2500.0,
        image_url: "url.png".to_string(),
    }
}

/// A treatment whose duration does not sit on the 15-minute grid.
pub fn off_grid_work(id: Uuid) -> Work {
    Work {
        duration_minutes: 37,
        ..massage_work(id)
    }
}
