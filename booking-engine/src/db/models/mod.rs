//! Database Models

pub mod booking;

// Re-exports
pub use booking::{Booking, BookingCreate, BookingStatus, BookingType};
