use std::fmt;

use crate::log::log_error::LogError;

/// Defines the severity levels for log messages, ordered by rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Fine-grained events that are most useful to debug an application.
    Debug = 0,
    /// Messages that highlight the progress of the application.
    Info = 1,
    /// Potentially harmful situations.
    Warning = 2,
    /// Error events that might still allow the application to continue running.
    Error = 3,
    /// Unrecoverable events. Writing at this level terminates the process.
    Fatal = 4,
}

impl LogLevel {
    pub const COUNT: usize = 5;

    /// Every level, lowest rank first.
    pub const ALL: [LogLevel; Self::COUNT] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub const LOWEST: LogLevel = LogLevel::Debug;
    pub const HIGHEST: LogLevel = LogLevel::Fatal;

    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Fixed line prefix, e.g. `"WARNING: "`.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG: ",
            LogLevel::Info => "INFO: ",
            LogLevel::Warning => "WARNING: ",
            LogLevel::Error => "ERROR: ",
            LogLevel::Fatal => "FATAL: ",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Case-insensitive lookup by name. Accepts `WARN` as an alias.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARNING" | "WARN" => Some(LogLevel::Warning),
            "ERROR" => Some(LogLevel::Error),
            "FATAL" => Some(LogLevel::Fatal),
            _ => None,
        }
    }
}

impl TryFrom<i64> for LogLevel {
    type Error = LogError;

    fn try_from(rank: i64) -> Result<Self, LogError> {
        LogLevel::ALL
            .into_iter()
            .find(|lvl| i64::from(lvl.rank()) == rank)
            .ok_or(LogError::InvalidThreshold(rank))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn ranks_are_strictly_increasing() {
        for pair in LogLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].rank() + 1, pair[1].rank());
        }
        assert_eq!(LogLevel::LOWEST.rank(), 0);
        assert_eq!(LogLevel::HIGHEST.rank(), 4);
    }

    #[test]
    fn try_from_accepts_every_valid_rank() {
        for lvl in LogLevel::ALL {
            assert_eq!(LogLevel::try_from(i64::from(lvl.rank())).unwrap(), lvl);
        }
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        for bad in [-1, 5, 999, i64::MIN, i64::MAX] {
            match LogLevel::try_from(bad) {
                Err(LogError::InvalidThreshold(r)) => assert_eq!(r, bad),
                other => panic!("expected InvalidThreshold, got: {:?}", other),
            }
        }
    }

    #[test]
    fn prefix_is_name_followed_by_colon() {
        for lvl in LogLevel::ALL {
            assert_eq!(lvl.prefix(), format!("{}: ", lvl));
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(LogLevel::from_name("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::from_name("Warn"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::from_name("FATAL"), Some(LogLevel::Fatal));
        assert_eq!(LogLevel::from_name("trace"), None);
    }
}
