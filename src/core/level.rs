//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log call, also used as the logger's admission threshold.
///
/// `All` and `Off` are sentinels: as a threshold, `All` admits every call
/// and `Off` admits none. They are never admitted as the level of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    #[default]
    All = 0,
    Debug = 1,
    Info = 2,
    Warning = 3,
    Error = 4,
    Fatal = 5,
    Off = 6,
}

impl Level {
    /// Every level, lowest first.
    pub const ALL_LEVELS: [Level; 7] = [
        Level::All,
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Fatal,
        Level::Off,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::All => "ALL",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Off => "OFF",
        }
    }

    /// Returns true when a call at `candidate` passes this threshold.
    #[inline]
    pub fn admits(self, candidate: Level) -> bool {
        !candidate.is_sentinel() && candidate >= self
    }

    /// `All` and `Off` only make sense as thresholds.
    #[inline]
    pub fn is_sentinel(self) -> bool {
        matches!(self, Level::All | Level::Off)
    }

    /// Convert a raw discriminant back into a level.
    pub fn from_u8(value: u8) -> Result<Self, LoggerError> {
        Self::ALL_LEVELS
            .get(usize::from(value))
            .copied()
            .ok_or(LoggerError::InvalidLevel(value.to_string()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Ok(Level::All),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            "OFF" => Ok(Level::Off),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        Self::from_u8(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_strict() {
        for pair in Level::ALL_LEVELS.windows(2) {
            assert!(pair[0] < pair[1], "{} should be below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_sentinels() {
        for level in Level::ALL_LEVELS {
            assert_eq!(Level::All.admits(level), !level.is_sentinel());
            assert!(!Level::Off.admits(level));
        }
    }

    #[test]
    fn test_sentinels_are_never_call_levels() {
        for threshold in Level::ALL_LEVELS {
            assert!(!threshold.admits(Level::All));
            assert!(!threshold.admits(Level::Off));
        }
    }

    #[test]
    fn test_boundary_admits() {
        assert!(Level::Warning.admits(Level::Warning));
        assert!(Level::Warning.admits(Level::Error));
        assert!(!Level::Warning.admits(Level::Info));
    }

    #[test]
    fn test_parse() {
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!(" info ".parse::<Level>().unwrap(), Level::Info);
        assert!(matches!(
            "verbose".parse::<Level>(),
            Err(LoggerError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_from_u8() {
        assert_eq!(Level::from_u8(3).unwrap(), Level::Warning);
        assert_eq!(Level::try_from(6).unwrap(), Level::Off);
        assert!(Level::from_u8(7).is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Level::Warning.to_string(), "WARNING");
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(Level::default(), Level::All);
    }
}
