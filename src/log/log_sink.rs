use std::io::{self, Write};

/// One of the two process-standard output streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Stdout,
    Stderr,
}

/// Where rendered lines end up.
///
/// Writes are best-effort: implementations swallow I/O errors.
pub trait LogSink: Send + Sync {
    fn write_line(&self, dest: Destination, line: &str);

    fn flush(&self) {}
}

/// Writes to the real process stdout / stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdStreams;

impl LogSink for StdStreams {
    fn write_line(&self, dest: Destination, line: &str) {
        // Each line goes out under the stream lock so concurrent writers never interleave.
        let _ = match dest {
            Destination::Stdout => io::stdout().lock().write_all(line.as_bytes()),
            Destination::Stderr => io::stderr().lock().write_all(line.as_bytes()),
        };
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}
