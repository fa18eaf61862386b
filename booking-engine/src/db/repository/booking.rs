//! Booking Repository

use async_trait::async_trait;
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, BookingFilter, BookingReader, RepoError, RepoResult};
use crate::db::models::{Booking, BookingCreate, BookingStatus};
use crate::utils::time;

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Insert a booking record
    ///
    /// Append-only: the availability path never mutates rows. `booking_time`
    /// must already be uniform RFC 3339 text (see `utils::time`).
    pub async fn create(&self, data: BookingCreate) -> RepoResult<Booking> {
        if time::parse_instant(&data.booking_time).is_none() {
            return Err(RepoError::Validation(format!(
                "Invalid booking_time: {}",
                data.booking_time
            )));
        }

        self.base
            .db()
            .query(
                "CREATE booking SET table_id = $table_id, booking_time = $booking_time, \
                 booking_type = $booking_type, status = $status, created_at = time::now() \
                 RETURN NONE",
            )
            .bind(("table_id", data.table_id.clone()))
            .bind(("booking_time", data.booking_time.clone()))
            .bind(("booking_type", data.booking_type.as_str()))
            .bind(("status", data.status.as_str()))
            .await?
            .check()?;

        Ok(Booking {
            table_id: data.table_id,
            booking_time: data.booking_time,
            booking_type: data.booking_type,
            status: data.status,
        })
    }

    /// Submission-time double check: active bookings already holding the
    /// exact slot on a table
    ///
    /// Narrows the read-then-write race window; it does not close it. True
    /// exclusion needs a storage-level uniqueness constraint over
    /// `(table_id, slot)` in front of correctness-critical allocation.
    pub async fn count_conflicts_at(
        &self,
        table_id: &str,
        booking_time: &str,
        status_in: &[BookingStatus],
    ) -> RepoResult<usize> {
        #[derive(Deserialize)]
        struct CountRow {
            total: usize,
        }

        let statuses: Vec<String> = status_in.iter().map(|s| s.as_str().to_string()).collect();
        let mut result = self
            .base
            .db()
            .query(
                "SELECT count() AS total FROM booking WHERE table_id = $table_id \
                 AND booking_time = $booking_time AND status IN $statuses GROUP ALL",
            )
            .bind(("table_id", table_id.to_string()))
            .bind(("booking_time", booking_time.to_string()))
            .bind(("statuses", statuses))
            .await?;
        let row: Option<CountRow> = result.take(0)?;
        Ok(row.map(|r| r.total).unwrap_or(0))
    }
}

#[async_trait]
impl BookingReader for BookingRepository {
    async fn query_bookings(&self, filter: BookingFilter) -> RepoResult<Vec<Booking>> {
        let (start, end) = filter.time_range;
        let statuses: Vec<String> = filter
            .status_in
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();

        // Uniform RFC 3339 text makes the lexicographic range chronological
        let bookings: Vec<Booking> = self
            .base
            .db()
            .query(
                "SELECT table_id, booking_time, booking_type, status FROM booking \
                 WHERE status IN $statuses AND booking_time >= $range_start \
                 AND booking_time <= $range_end",
            )
            .bind(("statuses", statuses))
            .bind(("range_start", time::format_instant(start)))
            .bind(("range_end", time::format_instant(end)))
            .await?
            .take(0)?;
        Ok(bookings)
    }
}
