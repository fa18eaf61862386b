//! In-Memory Booking Store
//!
//! Same filter semantics as the SurrealDB repository, for unit tests and
//! single-process embedding.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BookingFilter, BookingReader, RepoResult};
use crate::db::models::Booking;
use crate::utils::time;

#[derive(Debug, Clone, Default)]
pub struct MemoryBookingStore {
    bookings: Arc<RwLock<Vec<Booking>>>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Arc::new(RwLock::new(bookings)),
        }
    }

    pub async fn insert(&self, booking: Booking) {
        self.bookings.write().await.push(booking);
    }

    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bookings.read().await.is_empty()
    }
}

#[async_trait]
impl BookingReader for MemoryBookingStore {
    async fn query_bookings(&self, filter: BookingFilter) -> RepoResult<Vec<Booking>> {
        // Text comparison over uniform RFC 3339, matching the store query
        let range_start = time::format_instant(filter.time_range.0);
        let range_end = time::format_instant(filter.time_range.1);

        let rows = self.bookings.read().await;
        Ok(rows
            .iter()
            .filter(|b| filter.status_in.contains(&b.status))
            .filter(|b| {
                b.booking_time.as_str() >= range_start.as_str()
                    && b.booking_time.as_str() <= range_end.as_str()
            })
            .cloned()
            .collect())
    }
}
