//! Time helpers: reference-timezone conversions
//!
//! Date/time strings become instants at the service layer only; the
//! repository receives already-formatted instants.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime};
use chrono_tz::Tz;

/// Parse a calendar date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Parse a time-of-day string (HH:MM, seconds tolerated)
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()
}

/// Date + time-of-day → instant in the reference timezone
///
/// DST gap fallback: if the local time does not exist, interpret the naive
/// time as UTC instead of failing.
pub fn slot_instant(date: NaiveDate, time: NaiveTime, tz: Tz) -> DateTime<Tz> {
    let naive = date.and_time(time);
    naive
        .and_local_timezone(tz)
        .latest()
        .unwrap_or_else(|| naive.and_utc().with_timezone(&tz))
}

/// Start of the calendar day (00:00:00) in the reference timezone
pub fn day_start(date: NaiveDate, tz: Tz) -> DateTime<Tz> {
    slot_instant(date, NaiveTime::MIN, tz)
}

/// End of the calendar day (23:59:59) in the reference timezone
///
/// Inclusive bound; bookings land on whole-minute slots so the final second
/// is unreachable.
pub fn day_end(date: NaiveDate, tz: Tz) -> DateTime<Tz> {
    let last = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
    slot_instant(date, last, tz)
}

/// Uniform RFC 3339 text for stored instants (whole seconds, explicit offset)
///
/// One fixed format keeps lexicographic range comparison chronologically
/// correct in the store.
pub fn format_instant(instant: DateTime<Tz>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Parse a stored RFC 3339 instant
pub fn parse_instant(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok()
}

/// Fractional hours → duration, rounded to whole milliseconds
pub fn duration_from_hours(hours: f64) -> Duration {
    Duration::milliseconds((hours * 3_600_000.0).round() as i64)
}

/// Today's date in the reference timezone
pub fn today_in(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}
