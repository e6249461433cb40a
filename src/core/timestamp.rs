//! Timestamp layouts for the `Time` field of a record
//!
//! RFC 3339 is the default layout. ISO 8601, Unix and custom strftime
//! layouts are available for consumers that expect something else.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use super::error::LoggerError;

/// Source of "now" for record timestamps.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// The wall clock.
pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// A clock frozen at `instant`, for reproducible output.
pub fn fixed_clock(instant: DateTime<Utc>) -> Clock {
    Arc::new(move || instant)
}

/// Time layout applied to every record
///
/// # Examples
///
/// ```
/// use logga::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Rfc3339.format(&at), "2025-01-08T10:30:45Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with second precision: `2025-01-08T10:30:45Z`
    #[default]
    Rfc3339,

    /// RFC 3339 with nanosecond precision: `2025-01-08T10:30:45.123456789Z`
    Rfc3339Nanos,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime layout, e.g. `%d/%b/%Y:%H:%M:%S %z`
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Rfc3339Nanos => datetime.to_rfc3339_opts(SecondsFormat::Nanos, true),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(layout) => datetime.format(layout).to_string(),
        }
    }
}

impl FromStr for TimestampFormat {
    type Err = LoggerError;

    /// Accepts a layout name (`rfc3339`, `iso8601`, `unix`, ...) or, when the
    /// string contains a `%`, a custom strftime layout.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('%') {
            return Ok(TimestampFormat::Custom(s.to_string()));
        }
        match s.to_ascii_lowercase().as_str() {
            "rfc3339" => Ok(TimestampFormat::Rfc3339),
            "rfc3339nanos" | "rfc3339_nanos" => Ok(TimestampFormat::Rfc3339Nanos),
            "iso8601" => Ok(TimestampFormat::Iso8601),
            "unix" => Ok(TimestampFormat::Unix),
            "unixmillis" | "unix_millis" => Ok(TimestampFormat::UnixMillis),
            _ => Err(LoggerError::config(
                "time format",
                format!("unknown layout '{}'", s),
            )),
        }
    }
}
