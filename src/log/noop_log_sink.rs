use crate::log::log_sink::{Destination, LogSink};

/// Discards every line. Handy for silencing a `Logger` entirely.
#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn write_line(&self, _dest: Destination, _line: &str) {}
}
