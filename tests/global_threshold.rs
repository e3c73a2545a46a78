#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Exercises the process-wide logger. Kept as a single test so nothing else
//! in this binary races on the shared threshold.

use simplelog::{LogError, LogLevel, log};

#[test]
fn global_threshold_lifecycle() {
    assert_eq!(log::threshold(), LogLevel::Error);
    assert!(!log::is_debug_enabled());
    assert!(!log::enabled(LogLevel::Warning));
    assert!(log::enabled(LogLevel::Fatal));

    assert_eq!(log::set_threshold(999), Err(LogError::InvalidThreshold(999)));
    assert_eq!(log::threshold(), LogLevel::Error);

    log::set_threshold(0).unwrap();
    assert!(log::is_debug_enabled());
    assert_eq!(log::global().threshold_rank(), 0);

    log::set_level(LogLevel::Fatal);
    assert!(!log::enabled(LogLevel::Error));
    assert!(!log::write(LogLevel::Error, format_args!("suppressed")));
    assert!(!log::write_values(LogLevel::Info, &[&"suppressed"]));
    simplelog::log_error!("suppressed {}", 1);
    simplelog::log_warning_ln!("suppressed", 2);
}
