//! Log record handed to formatters

use super::level::Level;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One accepted log call, already rendered to strings.
///
/// Field order and serde names are the structured output contract:
/// `{"message": ..., "time": ..., "level": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub message: String,
    pub time: String,
    pub level: String,
}

impl LogRecord {
    pub fn new(
        message: impl Into<String>,
        time: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            time: time.into(),
            level: level.into(),
        }
    }

    /// Build a record for `level` stamped with `now` rendered through `layout`.
    pub fn at(
        level: Level,
        message: impl Into<String>,
        now: &DateTime<Utc>,
        layout: &TimestampFormat,
    ) -> Self {
        Self {
            message: message.into(),
            time: layout.format(now),
            level: level.to_str().to_string(),
        }
    }
}
