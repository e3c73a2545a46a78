//! simplelog is a tiny leveled-logging facade.
//!
//! Five fixed levels (`DEBUG`, `INFO`, `WARNING`, `ERROR`, `FATAL`) are each
//! bound to a line prefix and an output stream. A single run-time threshold
//! decides which of them are written. Writing at `FATAL` terminates the
//! process with exit status 1.
//!
//! ```rust,ignore
//! use simplelog::log::{self, log_level::LogLevel};
//!
//! log::set_level(LogLevel::Info);
//! simplelog::log_info!("listening on {}", addr);
//! simplelog::log_warning_ln!("slow request", elapsed_ms, "ms");
//! ```

/// Levels, bindings, the threshold and the process-wide logger.
pub mod log;

pub use log::{
    log_error::LogError,
    log_level::LogLevel,
    log_sink::{Destination, LogSink, StdStreams},
    logger::{LevelBinding, Logger, LoggerBuilder, RoutingPolicy},
};
