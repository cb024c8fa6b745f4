//! Client-side booking state: a typed client for the booking service and a
//! store that keeps the bookings a session has looked at plus the last error.

pub mod client;
pub mod error;
pub mod store;
pub mod types;

pub use client::{ApiConfiguration, BookingsApi, HttpBookingsApi};
pub use error::{ApiError, LookupError, FETCH_BOOKING_FAILED};
pub use store::BookingStore;
pub use types::Booking;
