//! Repository Module
//!
//! Booking store access: error types, the reader seam consumed by the
//! availability service, and the concrete store implementations.

pub mod booking;
pub mod memory;

// Re-exports
pub use booking::BookingRepository;
pub use memory::MemoryBookingStore;

use async_trait::async_trait;
use chrono::DateTime;
use chrono_tz::Tz;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::db::models::{Booking, BookingStatus};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Day-window booking query: status set + inclusive instant range
///
/// A degenerate range (`start == end`) selects an exact slot.
#[derive(Debug, Clone)]
pub struct BookingFilter {
    pub status_in: Vec<BookingStatus>,
    pub time_range: (DateTime<Tz>, DateTime<Tz>),
}

/// Read seam between the availability service and the booking store
///
/// Implementations return a superset of candidates (every matching booking in
/// the range); precise overlap filtering stays in the service.
#[async_trait]
pub trait BookingReader: Send + Sync {
    async fn query_bookings(&self, filter: BookingFilter) -> RepoResult<Vec<Booking>>;
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
