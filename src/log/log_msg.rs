use chrono::{DateTime, Local};

use crate::log::log_level::LogLevel;

/// Date and time decoration placed after the prefix, e.g. `2009/01/23 01:23:23`.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// A single log event that passed the threshold and is about to be written.
#[derive(Debug, Clone)]
pub struct LogMsg {
    /// The severity level of the event.
    pub level: LogLevel,
    /// Local wall-clock time at which the event was recorded.
    pub ts: DateTime<Local>,
    /// The message content, without prefix or timestamp.
    pub text: String,
}

impl LogMsg {
    /// Creates a `LogMsg` stamped with the current local time.
    pub fn now(level: LogLevel, text: impl Into<String>) -> Self {
        Self::new(level, text, Local::now())
    }

    pub fn new(level: LogLevel, text: impl Into<String>, ts: DateTime<Local>) -> Self {
        Self {
            level,
            ts,
            text: text.into(),
        }
    }

    /// Renders the full output line: `<level prefix><timestamp> <text>\n`.
    ///
    /// A single trailing newline already present in `text` is not doubled.
    #[must_use]
    pub fn render(&self) -> String {
        let text = self.text.strip_suffix('\n').unwrap_or(&self.text);
        format!(
            "{}{} {text}\n",
            self.level.prefix(),
            self.ts.format(TIMESTAMP_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use chrono::TimeZone;

    fn fixed_ts() -> DateTime<Local> {
        Local.with_ymd_and_hms(2009, 1, 23, 1, 23, 23).single().unwrap()
    }

    #[test]
    fn render_has_prefix_timestamp_and_text() {
        let m = LogMsg::new(LogLevel::Info, "hello", fixed_ts());
        assert_eq!(m.render(), "INFO: 2009/01/23 01:23:23 hello\n");
    }

    #[test]
    fn render_does_not_double_trailing_newline() {
        let m = LogMsg::new(LogLevel::Error, "boom\n", fixed_ts());
        assert_eq!(m.render(), "ERROR: 2009/01/23 01:23:23 boom\n");
    }

    #[test]
    fn render_prefix_follows_the_level() {
        for lvl in LogLevel::ALL {
            let line = LogMsg::new(lvl, "x", fixed_ts()).render();
            assert_eq!(line, format!("{}2009/01/23 01:23:23 x\n", lvl.prefix()));
        }
    }

    #[test]
    fn render_keeps_empty_message() {
        let m = LogMsg::new(LogLevel::Debug, "", fixed_ts());
        assert_eq!(m.render(), "DEBUG: 2009/01/23 01:23:23 \n");
    }
}
