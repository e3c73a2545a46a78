use crate::log::{
    log_error::LogError,
    log_level::LogLevel,
    log_msg::LogMsg,
    log_sink::{Destination, LogSink, StdStreams},
};

use std::{
    fmt::{self, Write as _},
    process,
    sync::atomic::{AtomicU8, Ordering},
};

/// Exit status used when a Fatal message is written.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Threshold a freshly built `Logger` starts with.
pub const DEFAULT_THRESHOLD: LogLevel = LogLevel::Error;

/// Decides which stream each level is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RoutingPolicy {
    /// Debug and Info on stdout; Warning, Error and Fatal on stderr.
    #[default]
    Split,
    /// Every level on the same stream.
    Single(Destination),
}

impl RoutingPolicy {
    #[must_use]
    pub const fn destination_for(self, level: LogLevel) -> Destination {
        match self {
            RoutingPolicy::Single(dest) => dest,
            RoutingPolicy::Split => match level {
                LogLevel::Debug | LogLevel::Info => Destination::Stdout,
                LogLevel::Warning | LogLevel::Error | LogLevel::Fatal => Destination::Stderr,
            },
        }
    }
}

/// Fixed association between a level, its prefix and its output stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelBinding {
    level: LogLevel,
    prefix: &'static str,
    destination: Destination,
}

impl LevelBinding {
    fn new(level: LogLevel, routing: RoutingPolicy) -> Self {
        Self {
            level,
            prefix: level.prefix(),
            destination: routing.destination_for(level),
        }
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[must_use]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[must_use]
    pub fn destination(&self) -> Destination {
        self.destination
    }
}

/// Leveled logger: one binding per level plus a run-time threshold.
///
/// A message is written only when its level ranks at or above the threshold
/// read at call time. Bindings are created once in [`LoggerBuilder::build`]
/// and never change afterwards; only the threshold is mutable.
///
/// # Fatal
///
/// Any write at [`LogLevel::Fatal`] terminates the process with exit status
/// [`FATAL_EXIT_CODE`] after the (gated) write and a flush of the sink. The
/// caller's error handling is bypassed entirely.
pub struct Logger {
    bindings: [LevelBinding; LogLevel::COUNT],
    threshold: AtomicU8,
    sink: Box<dyn LogSink>,
}

impl Logger {
    /// Logger bound to the process streams with the default split routing.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Replaces the threshold with the level of the given rank.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidThreshold`] if `rank` is not between
    /// `DEBUG` and `FATAL`. The current threshold is left untouched.
    pub fn set_threshold(&self, rank: i64) -> Result<(), LogError> {
        let level = LogLevel::try_from(rank)?;
        self.set_level(level);
        Ok(())
    }

    pub fn set_level(&self, level: LogLevel) {
        self.threshold.store(level.rank(), Ordering::Relaxed);
    }

    #[must_use]
    pub fn threshold(&self) -> LogLevel {
        // Only `set_level` stores into the atomic, so the rank is always valid.
        LogLevel::try_from(i64::from(self.threshold_rank())).unwrap_or(DEFAULT_THRESHOLD)
    }

    #[must_use]
    pub fn threshold_rank(&self) -> u8 {
        self.threshold.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn is_debug_enabled(&self) -> bool {
        self.threshold_rank() == LogLevel::Debug.rank()
    }

    /// Gating test: would a message at `level` be written right now?
    #[inline]
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.rank() >= self.threshold_rank()
    }

    #[must_use]
    pub fn binding(&self, level: LogLevel) -> &LevelBinding {
        &self.bindings[usize::from(level.rank())]
    }

    #[must_use]
    pub fn bindings(&self) -> &[LevelBinding] {
        &self.bindings
    }

    /// Writes a formatted message at `level` if the threshold allows it.
    ///
    /// Returns whether a line was emitted. Never returns for `Fatal`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// logger.write(LogLevel::Warning, format_args!("retrying in {}s", secs));
    /// ```
    pub fn write(&self, level: LogLevel, args: fmt::Arguments<'_>) -> bool {
        let emitted = self.emit(level, || args.to_string());
        if level == LogLevel::Fatal {
            self.terminate();
        }
        emitted
    }

    /// Writes the values joined by single spaces at `level` if the threshold
    /// allows it.
    ///
    /// Every line ends in exactly one newline. A last value that already ends
    /// in `\n` does not produce an extra blank line, unlike writers that
    /// always append one.
    ///
    /// Returns whether a line was emitted. Never returns for `Fatal`.
    pub fn write_values(&self, level: LogLevel, values: &[&dyn fmt::Display]) -> bool {
        let emitted = self.emit(level, || join_values(values));
        if level == LogLevel::Fatal {
            self.terminate();
        }
        emitted
    }

    /// Writes a formatted message at Fatal level, then exits with status 1.
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit(LogLevel::Fatal, || args.to_string());
        self.terminate()
    }

    /// Positional flavour of [`Logger::fatal`].
    pub fn fatal_values(&self, values: &[&dyn fmt::Display]) -> ! {
        self.emit(LogLevel::Fatal, || join_values(values));
        self.terminate()
    }

    /// Gated write without the Fatal exit. The message is only built once the
    /// gate has passed.
    pub(crate) fn emit(&self, level: LogLevel, text: impl FnOnce() -> String) -> bool {
        if !self.enabled(level) {
            return false;
        }
        let binding = self.binding(level);
        let line = LogMsg::now(level, text()).render();
        self.sink.write_line(binding.destination, &line);
        true
    }

    fn terminate(&self) -> ! {
        self.sink.flush();
        process::exit(FATAL_EXIT_CODE)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("bindings", &self.bindings)
            .field("threshold", &self.threshold())
            .finish_non_exhaustive()
    }
}

/// Concatenates values separated by single spaces.
#[must_use]
pub fn join_values(values: &[&dyn fmt::Display]) -> String {
    let mut out = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{v}");
    }
    out
}

/// Configures a [`Logger`] before its bindings are fixed.
pub struct LoggerBuilder {
    routing: RoutingPolicy,
    threshold: LogLevel,
    sink: Box<dyn LogSink>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            routing: RoutingPolicy::default(),
            threshold: DEFAULT_THRESHOLD,
            sink: Box::new(StdStreams),
        }
    }
}

impl LoggerBuilder {
    #[must_use]
    pub fn routing(mut self, routing: RoutingPolicy) -> Self {
        self.routing = routing;
        self
    }

    #[must_use]
    pub fn threshold(mut self, level: LogLevel) -> Self {
        self.threshold = level;
        self
    }

    #[must_use]
    pub fn sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            bindings: LogLevel::ALL.map(|level| LevelBinding::new(level, self.routing)),
            threshold: AtomicU8::new(self.threshold.rank()),
            sink: self.sink,
        }
    }
}
