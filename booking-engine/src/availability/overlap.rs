//! Overlap Predicate
//!
//! A booking occupies the half-open interval `[start, start + duration)`:
//! touching endpoints do not conflict, so back-to-back bookings with zero gap
//! are allowed.

use chrono::{DateTime, Duration, Utc};

/// Whether a requested window conflicts with a candidate booking
///
/// `request_start < request_end` is the caller's responsibility; an inverted
/// window yields a meaningless `false`, never an error. Zero- and
/// negative-duration intervals have empty extent and overlap nothing, even
/// a degenerate point strictly inside the other interval.
pub fn overlaps(
    request_start: DateTime<Utc>,
    request_end: DateTime<Utc>,
    candidate_start: DateTime<Utc>,
    duration: Duration,
) -> bool {
    if duration <= Duration::zero() || request_start >= request_end {
        return false;
    }
    let candidate_end = candidate_start + duration;
    request_start < candidate_end && request_end > candidate_start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(raw: &str) -> DateTime<Utc> {
        raw.parse().unwrap()
    }

    #[test]
    fn detects_direct_overlap() {
        // Request 12:00-14:00, booking 13:00-15:00
        assert!(overlaps(
            utc("2024-01-01T12:00:00Z"),
            utc("2024-01-01T14:00:00Z"),
            utc("2024-01-01T13:00:00Z"),
            Duration::hours(2),
        ));
    }

    #[test]
    fn back_to_back_after_is_free() {
        // Booking starts exactly when the request ends
        assert!(!overlaps(
            utc("2024-01-01T12:00:00Z"),
            utc("2024-01-01T14:00:00Z"),
            utc("2024-01-01T14:00:00Z"),
            Duration::hours(2),
        ));
    }

    #[test]
    fn back_to_back_before_is_free() {
        // Booking 12:00-14:00 ends exactly when the request starts
        assert!(!overlaps(
            utc("2024-01-01T14:00:00Z"),
            utc("2024-01-01T16:00:00Z"),
            utc("2024-01-01T12:00:00Z"),
            Duration::hours(2),
        ));
    }

    #[test]
    fn adjacent_slot_boundary_holds_for_any_start() {
        // A request occupying the slot right after a booking never conflicts
        let candidate = utc("2024-06-15T18:30:00Z");
        for hours in [1, 2, 3] {
            let duration = Duration::hours(hours);
            assert!(!overlaps(
                candidate + duration,
                candidate + duration * 2,
                candidate,
                duration,
            ));
        }
    }

    #[test]
    fn containment_in_either_direction_conflicts() {
        // Booking fully inside the request window
        assert!(overlaps(
            utc("2024-01-01T10:00:00Z"),
            utc("2024-01-01T18:00:00Z"),
            utc("2024-01-01T12:00:00Z"),
            Duration::hours(2),
        ));
        // Request fully inside the booking window
        assert!(overlaps(
            utc("2024-01-01T12:30:00Z"),
            utc("2024-01-01T13:00:00Z"),
            utc("2024-01-01T12:00:00Z"),
            Duration::hours(2),
        ));
    }

    #[test]
    fn zero_duration_never_overlaps() {
        // Degenerate booking strictly inside the request window
        assert!(!overlaps(
            utc("2024-01-01T10:00:00Z"),
            utc("2024-01-01T18:00:00Z"),
            utc("2024-01-01T12:00:00Z"),
            Duration::zero(),
        ));
        assert!(!overlaps(
            utc("2024-01-01T10:00:00Z"),
            utc("2024-01-01T18:00:00Z"),
            utc("2024-01-01T12:00:00Z"),
            Duration::hours(-1),
        ));
    }

    #[test]
    fn partial_overlap_at_window_edges_conflicts() {
        // Booking 11:00-13:00 clips the start of a 12:00-14:00 request
        assert!(overlaps(
            utc("2024-01-01T12:00:00Z"),
            utc("2024-01-01T14:00:00Z"),
            utc("2024-01-01T11:00:00Z"),
            Duration::hours(2),
        ));
        // Booking 13:30 clips the end
        assert!(overlaps(
            utc("2024-01-01T12:00:00Z"),
            utc("2024-01-01T14:00:00Z"),
            utc("2024-01-01T13:30:00Z"),
            Duration::hours(2),
        ));
    }
}
