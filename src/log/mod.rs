pub mod log_error;
pub mod log_level;
pub mod log_macros;
pub mod log_msg;
pub mod log_sink;
pub mod logger;
pub mod noop_log_sink;
pub use noop_log_sink::NoopLogSink;

use std::{fmt, sync::LazyLock};

use crate::log::{log_error::LogError, log_level::LogLevel, logger::Logger};

/// Process-wide registry: split routing, real std streams, threshold `ERROR`.
static GLOBAL: LazyLock<Logger> = LazyLock::new(Logger::new);

/// The process-wide logger used by the free functions and macros.
#[inline]
#[must_use]
pub fn global() -> &'static Logger {
    &GLOBAL
}

/// Sets the process-wide threshold from a rank.
///
/// # Errors
///
/// Returns [`LogError::InvalidThreshold`] when `rank` is outside `[DEBUG, FATAL]`.
pub fn set_threshold(rank: i64) -> Result<(), LogError> {
    global().set_threshold(rank)
}

pub fn set_level(level: LogLevel) {
    global().set_level(level);
}

#[must_use]
pub fn threshold() -> LogLevel {
    global().threshold()
}

#[must_use]
pub fn is_debug_enabled() -> bool {
    global().is_debug_enabled()
}

#[must_use]
pub fn enabled(level: LogLevel) -> bool {
    global().enabled(level)
}

pub fn write(level: LogLevel, args: fmt::Arguments<'_>) -> bool {
    global().write(level, args)
}

pub fn write_values(level: LogLevel, values: &[&dyn fmt::Display]) -> bool {
    global().write_values(level, values)
}

pub fn fatal(args: fmt::Arguments<'_>) -> ! {
    global().fatal(args)
}

pub fn fatal_values(values: &[&dyn fmt::Display]) -> ! {
    global().fatal_values(values)
}
