//! Availability Query Engine
//!
//! Decides which tables conflict with a requested booking slot. The service
//! prefetches the calendar day's active bookings through the
//! [`BookingReader`] seam and filters precisely in-process with the
//! [`overlaps`] predicate, so the interval semantics live in one testable
//! native function instead of a query language.
//!
//! The answer is advisory: availability is read here and written elsewhere,
//! so a race window remains between check and insert. The write path must
//! re-check conflicts at submission time (see
//! `BookingRepository::count_conflicts_at`), and correctness-critical
//! allocation additionally needs a storage-level exclusion constraint over
//! `(table_id, time range)`.

mod overlap;

pub use overlap::overlaps;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{error, warn};

use crate::core::EngineConfig;
use crate::db::models::{BookingStatus, BookingType};
use crate::db::repository::{BookingFilter, BookingReader, RepoError, RepoResult};
use crate::utils::time;

/// Conflict annotation for one table (UI badge data)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableConflict {
    #[serde(rename = "type")]
    pub booking_type: BookingType,
}

/// Aggregated availability answer for one requested slot
///
/// `error` set means the answer is degraded: the reader failed or the input
/// was unintelligible, and empty `ids` must NOT be read as "all tables free".
/// Callers branch on [`Occupancy::is_degraded`] before trusting emptiness.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Occupancy {
    /// Tables with at least one conflicting active booking, duplicate-free
    pub ids: Vec<String>,
    /// Table id → conflict annotation; last writer wins per table
    pub statuses: HashMap<String, TableConflict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Occupancy {
    fn degraded(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    /// True when emptiness cannot be trusted as confirmed availability
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Availability query service: stateless, one reader round trip per call
pub struct AvailabilityService {
    reader: Arc<dyn BookingReader>,
    config: EngineConfig,
}

impl AvailabilityService {
    pub fn new(reader: Arc<dyn BookingReader>, config: EngineConfig) -> Self {
        Self { reader, config }
    }

    /// Tables occupied for the requested slot
    ///
    /// `date` is `YYYY-MM-DD`, `time` is `HH:MM`; a missing value is a
    /// defined no-op (empty answer, no query issued). `duration_hours`
    /// defaults to the configured booking duration. Reader failure degrades
    /// to an empty answer with `error` set; the check must never take the
    /// caller down.
    pub async fn fetch_occupied_tables(
        &self,
        date: Option<&str>,
        time_of_day: Option<&str>,
        duration_hours: Option<f64>,
    ) -> Occupancy {
        let (Some(date), Some(time_of_day)) = (date, time_of_day) else {
            return Occupancy::default();
        };

        let Some(day) = time::parse_date(date) else {
            return Occupancy::degraded(format!("Invalid date: {date}"));
        };
        let Some(slot) = time::parse_time(time_of_day) else {
            return Occupancy::degraded(format!("Invalid time: {time_of_day}"));
        };

        let tz = self.config.reference_timezone;
        let duration = time::duration_from_hours(
            duration_hours.unwrap_or(self.config.default_duration_hours),
        );
        let requested_start = time::slot_instant(day, slot, tz).with_timezone(&Utc);
        let requested_end = requested_start + duration;

        let filter = BookingFilter {
            status_in: BookingStatus::ACTIVE.to_vec(),
            time_range: (time::day_start(day, tz), time::day_end(day, tz)),
        };

        let candidates = match self.reader.query_bookings(filter).await {
            Ok(rows) => rows,
            Err(e) => {
                error!(date, time = time_of_day, error = %e, "Availability query failed");
                return Occupancy::degraded(e.to_string());
            }
        };

        let mut occupancy = Occupancy::default();
        for booking in candidates {
            let Some(candidate_start) = time::parse_instant(&booking.booking_time) else {
                warn!(
                    raw = %booking.booking_time,
                    "Skipping booking with malformed booking_time"
                );
                continue;
            };
            let Some(table_id) = booking.table_id else {
                // Zone-less pre-order: no table to block
                continue;
            };
            if overlaps(
                requested_start,
                requested_end,
                candidate_start.with_timezone(&Utc),
                duration,
            ) {
                if !occupancy.ids.contains(&table_id) {
                    occupancy.ids.push(table_id.clone());
                }
                occupancy.statuses.insert(
                    table_id,
                    TableConflict {
                        booking_type: booking.booking_type,
                    },
                );
            }
        }
        occupancy
    }

    /// Table ids booked at exactly the requested slot
    ///
    /// Floor-plan refresh helper: equality on the stored instant rather than
    /// interval overlap, filtered by `status_in`.
    pub async fn booked_table_ids_at(
        &self,
        date: &str,
        time_of_day: &str,
        status_in: &[BookingStatus],
    ) -> RepoResult<Vec<String>> {
        let day = time::parse_date(date)
            .ok_or_else(|| RepoError::Validation(format!("Invalid date: {date}")))?;
        let slot = time::parse_time(time_of_day)
            .ok_or_else(|| RepoError::Validation(format!("Invalid time: {time_of_day}")))?;

        let instant = time::slot_instant(day, slot, self.config.reference_timezone);
        let filter = BookingFilter {
            status_in: status_in.to_vec(),
            time_range: (instant, instant),
        };

        let rows = self.reader.query_bookings(filter).await?;
        let mut ids: Vec<String> = Vec::new();
        for booking in rows {
            if let Some(id) = booking.table_id
                && !ids.contains(&id)
            {
                ids.push(id);
            }
        }
        Ok(ids)
    }
}
