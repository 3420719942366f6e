// libs/booking-cell/src/repository.rs
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

use shared_database::SupabaseClient;
use shared_models::RepositoryError;

use crate::models::{Booking, NewBooking};

/// Reservation lookup and write contract consumed by the booking service.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// All bookings whose start falls on the given calendar date,
    /// ascending by start time.
    async fn bookings_on_date(&self, date: NaiveDate) -> Result<Vec<Booking>, RepositoryError>;

    /// A customer's bookings, ascending by start time.
    async fn bookings_for_customer(&self, customer_id: Uuid)
        -> Result<Vec<Booking>, RepositoryError>;

    /// Persist a validated booking; the store assigns the id.
    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, RepositoryError>;

    /// Returns whether a row was actually deleted.
    async fn delete_booking(&self, booking_id: Uuid) -> Result<bool, RepositoryError>;
}

pub struct SupabaseBookingRepository {
    supabase: Arc<SupabaseClient>,
}

impl SupabaseBookingRepository {
    pub fn new(supabase: Arc<SupabaseClient>) -> Self {
        Self { supabase }
    }

    fn representation_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));
        headers
    }
}

#[async_trait]
impl BookingRepository for SupabaseBookingRepository {
    async fn bookings_on_date(&self, date: NaiveDate) -> Result<Vec<Booking>, RepositoryError> {
        debug!("Fetching bookings on {}", date);

        let next_day = date + Duration::days(1);
        let path = format!(
            "/rest/v1/bookings?start_time=gte.{}T00:00:00&start_time=lt.{}T00:00:00&order=start_time.asc",
            date, next_day
        );

        let bookings: Vec<Booking> = self
            .supabase
            .request(Method::GET, &path, None, None)
            .await
            .map_err(RepositoryError::new)?;

        Ok(bookings)
    }

    async fn bookings_for_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<Booking>, RepositoryError> {
        debug!("Fetching bookings for customer {}", customer_id);

        let path = format!(
            "/rest/v1/bookings?customer_id=eq.{}&order=start_time.asc",
            customer_id
        );

        let bookings: Vec<Booking> = self
            .supabase
            .request(Method::GET, &path, None, None)
            .await
            .map_err(RepositoryError::new)?;

        Ok(bookings)
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, RepositoryError> {
        debug!(
            "Creating booking for customer {} at {}",
            booking.customer_id, booking.start_time
        );

        let result: Vec<Booking> = self
            .supabase
            .request_with_headers(
                Method::POST,
                "/rest/v1/bookings",
                None,
                Some(json!(booking)),
                Some(Self::representation_headers()),
            )
            .await
            .map_err(RepositoryError::new)?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| RepositoryError::new(anyhow!("booking insert returned no row")))
    }

    async fn delete_booking(&self, booking_id: Uuid) -> Result<bool, RepositoryError> {
        debug!("Deleting booking {}", booking_id);

        let path = format!("/rest/v1/bookings?id=eq.{}", booking_id);
        let deleted: Vec<Value> = self
            .supabase
            .request_with_headers(
                Method::DELETE,
                &path,
                None,
                None,
                Some(Self::representation_headers()),
            )
            .await
            .map_err(RepositoryError::new)?;

        Ok(!deleted.is_empty())
    }
}
