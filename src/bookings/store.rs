use tokio::sync::RwLock;

use super::client::BookingsApi;
use super::error::{LookupError, FETCH_BOOKING_FAILED};
use super::types::Booking;

/// Session-scoped booking state backed by a `BookingsApi`.
///
/// Every lookup returns its outcome directly. The `error` cell additionally
/// records the last failure for observers that only watch state; nothing
/// clears it except `clear_error`. Concurrent writers are last-write-wins.
pub struct BookingStore<A> {
    api: A,
    bookings: RwLock<Vec<Booking>>,
    error: RwLock<Option<String>>,
}

impl<A: BookingsApi> BookingStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            bookings: RwLock::new(Vec::new()),
            error: RwLock::new(None),
        }
    }

    pub async fn bookings(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }

    pub async fn error(&self) -> Option<String> {
        self.error.read().await.clone()
    }

    pub async fn clear_error(&self) {
        *self.error.write().await = None;
    }

    /// Fetches one booking. Single attempt; `bookings` is not modified and a
    /// previous error is left in place on success.
    pub async fn get_booking_by_id(&self, booking_id: &str) -> Result<Booking, LookupError> {
        match self.api.get_booking(booking_id).await {
            Ok(booking) => Ok(booking),
            Err(source) => {
                tracing::error!(booking_id, error = %source, "failed to fetch booking");
                *self.error.write().await = Some(FETCH_BOOKING_FAILED.to_string());
                Err(LookupError {
                    booking_id: booking_id.to_string(),
                    source,
                })
            }
        }
    }

    /// Like `get_booking_by_id`, and on success upserts the booking into
    /// `bookings` keyed by `id`.
    pub async fn fetch_and_cache(&self, booking_id: &str) -> Result<Booking, LookupError> {
        let booking = self.get_booking_by_id(booking_id).await?;

        let mut bookings = self.bookings.write().await;
        match bookings.iter_mut().find(|b| b.id == booking.id) {
            Some(existing) => *existing = booking.clone(),
            None => bookings.push(booking.clone()),
        }
        Ok(booking)
    }
}
