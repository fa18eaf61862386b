//! Booking Engine - table availability and overlap detection
//!
//! # Architecture
//!
//! Core of a restaurant table-booking system: given a requested date, time
//! slot and duration, decide which tables conflict with existing active
//! bookings.
//!
//! ```text
//! booking-engine/src/
//! ├── availability/  # Overlap predicate + availability query service
//! ├── core/          # Configuration (reference timezone, slot duration)
//! ├── db/            # Embedded store, booking model, repositories
//! └── utils/         # Time helpers, logging setup
//! ```
//!
//! The availability answer is advisory. Availability is read here but
//! bookings are written elsewhere, so the check-then-insert race is inherent
//! to the shape of the system: the write path re-checks conflicts at
//! submission time ([`BookingRepository::count_conflicts_at`]), and
//! correctness-critical allocation needs a storage-level exclusion
//! constraint over `(table_id, time range)` as the companion invariant.

pub mod availability;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use availability::{AvailabilityService, Occupancy, TableConflict, overlaps};
pub use core::EngineConfig;
pub use db::DbService;
pub use db::models::{Booking, BookingCreate, BookingStatus, BookingType};
pub use db::repository::{
    BookingFilter, BookingReader, BookingRepository, MemoryBookingStore, RepoError, RepoResult,
};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
