//! Engine Configuration

use chrono_tz::Tz;

/// Booking engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | BOOKING_TZ | Asia/Bangkok | Reference timezone for all slot arithmetic |
/// | BOOKING_DURATION_HOURS | 2 | Default booking duration |
///
/// The reference timezone is threaded through every interval construction
/// (requested windows, calendar-day bounds, exact slots), so availability
/// never depends on the platform default timezone.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Timezone all stored instants and caller-supplied slots share
    pub reference_timezone: Tz,
    /// Booking duration applied when a query does not pass one
    pub default_duration_hours: f64,
}

impl EngineConfig {
    pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Bangkok;
    pub const DEFAULT_DURATION_HOURS: f64 = 2.0;

    /// Load configuration from environment variables
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let reference_timezone = std::env::var("BOOKING_TZ")
            .ok()
            .and_then(|v| {
                v.parse().map_err(|_| {
                    tracing::warn!("Unknown BOOKING_TZ '{v}', falling back to {}", Self::DEFAULT_TIMEZONE);
                }).ok()
            })
            .unwrap_or(Self::DEFAULT_TIMEZONE);

        let default_duration_hours = std::env::var("BOOKING_DURATION_HOURS")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|h| *h > 0.0)
            .unwrap_or(Self::DEFAULT_DURATION_HOURS);

        Self {
            reference_timezone,
            default_duration_hours,
        }
    }

    /// Configuration with an explicit timezone, defaults elsewhere
    ///
    /// Commonly used in tests
    pub fn with_timezone(tz: Tz) -> Self {
        Self {
            reference_timezone: tz,
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_timezone: Self::DEFAULT_TIMEZONE,
            default_duration_hours: Self::DEFAULT_DURATION_HOURS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_bangkok_two_hours() {
        let config = EngineConfig::default();
        assert_eq!(config.reference_timezone, chrono_tz::Asia::Bangkok);
        assert_eq!(config.default_duration_hours, 2.0);
    }

    #[test]
    fn with_timezone_overrides_only_the_timezone() {
        let config = EngineConfig::with_timezone(chrono_tz::UTC);
        assert_eq!(config.reference_timezone, chrono_tz::UTC);
        assert_eq!(config.default_duration_hours, 2.0);
    }
}
