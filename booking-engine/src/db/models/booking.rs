//! Booking Model

use serde::{Deserialize, Serialize};

/// Booking lifecycle status
///
/// Only active statuses hold a table; completed and cancelled bookings never
/// block a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Seated,
    Ready,
    Approved,
    Paid,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Statuses that count toward occupancy
    pub const ACTIVE: [BookingStatus; 6] = [
        Self::Pending,
        Self::Confirmed,
        Self::Seated,
        Self::Ready,
        Self::Approved,
        Self::Paid,
    ];

    pub fn is_active(&self) -> bool {
        Self::ACTIVE.contains(self)
    }

    /// Wire name (snake_case), used as a query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Seated => "seated",
            Self::Ready => "ready",
            Self::Approved => "approved",
            Self::Paid => "paid",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking channel tag: informational only, never part of the overlap logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingType {
    DineIn,
    WalkIn,
    SteakPreorder,
}

impl BookingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DineIn => "dine_in",
            Self::WalkIn => "walk_in",
            Self::SteakPreorder => "steak_preorder",
        }
    }
}

impl std::fmt::Display for BookingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking record as read from the store
///
/// `booking_time` stays raw RFC 3339 text here; the availability layer parses
/// it and skips records that fail to parse. `table_id` is absent for
/// pre-orders without a table zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default)]
    pub table_id: Option<String>,
    pub booking_time: String,
    pub booking_type: BookingType,
    pub status: BookingStatus,
}

/// Create booking payload (write path)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub table_id: Option<String>,
    /// Slot instant, uniform RFC 3339 text in the reference timezone
    pub booking_time: String,
    pub booking_type: BookingType,
    /// Submission flows normally start at [`BookingStatus::Pending`]
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_set_excludes_terminal_statuses() {
        assert!(BookingStatus::Confirmed.is_active());
        assert!(BookingStatus::Paid.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
        assert!(!BookingStatus::Completed.is_active());
        assert_eq!(BookingStatus::ACTIVE.len(), 6);
    }

    #[test]
    fn wire_names_match_serde() {
        let json = serde_json::to_string(&BookingStatus::Seated).unwrap();
        assert_eq!(json, "\"seated\"");
        assert_eq!(BookingStatus::Seated.as_str(), "seated");

        let json = serde_json::to_string(&BookingType::SteakPreorder).unwrap();
        assert_eq!(json, "\"steak_preorder\"");

        let parsed: BookingStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(parsed, BookingStatus::Pending);
    }
}
