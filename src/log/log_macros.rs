//! Leveled logging macros over the process-wide logger and explicit `Logger`s.
//!
//! Formatted macros take `format!` arguments. The `_ln` variants take plain
//! values and join them with single spaces.
//!
//! `log_fatal!` and `log_fatal_ln!` never return: the process exits with
//! status 1 after the line is written.

// ============================================================================
// 1. GENERIC MACROS
// ============================================================================

#[macro_export]
macro_rules! log_at {
    ($lvl:expr, $($arg:tt)+) => {{
        let _ = $crate::log::write($lvl, format_args!($($arg)+));
    }};
}

#[macro_export]
macro_rules! log_values_at {
    ($lvl:expr $(, $val:expr)* $(,)?) => {{
        let _ = $crate::log::write_values($lvl, &[$(&$val as &dyn ::std::fmt::Display),*]);
    }};
}

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)+) => {{
        let _ = $logger.write($lvl, format_args!($($arg)+));
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS
// ============================================================================

// ---------------------- DEBUG ----------------------
#[macro_export]
macro_rules! log_debug    { ($($arg:tt)+) => { $crate::log_at!($crate::log::log_level::LogLevel::Debug, $($arg)+) } }
#[macro_export]
macro_rules! log_debug_ln { ($($val:expr),* $(,)?) => { $crate::log_values_at!($crate::log::log_level::LogLevel::Debug $(, $val)*) } }

// ---------------------- INFO ----------------------
#[macro_export]
macro_rules! log_info    { ($($arg:tt)+) => { $crate::log_at!($crate::log::log_level::LogLevel::Info, $($arg)+) } }
#[macro_export]
macro_rules! log_info_ln { ($($val:expr),* $(,)?) => { $crate::log_values_at!($crate::log::log_level::LogLevel::Info $(, $val)*) } }

// ---------------------- WARNING ----------------------
#[macro_export]
macro_rules! log_warning    { ($($arg:tt)+) => { $crate::log_at!($crate::log::log_level::LogLevel::Warning, $($arg)+) } }
#[macro_export]
macro_rules! log_warning_ln { ($($val:expr),* $(,)?) => { $crate::log_values_at!($crate::log::log_level::LogLevel::Warning $(, $val)*) } }

// ---------------------- ERROR ----------------------
#[macro_export]
macro_rules! log_error    { ($($arg:tt)+) => { $crate::log_at!($crate::log::log_level::LogLevel::Error, $($arg)+) } }
#[macro_export]
macro_rules! log_error_ln { ($($val:expr),* $(,)?) => { $crate::log_values_at!($crate::log::log_level::LogLevel::Error $(, $val)*) } }

// ---------------------- FATAL ----------------------
// These diverge, so they can sit in any expression position.
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)+) => {
        $crate::log::fatal(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_fatal_ln {
    ($($val:expr),* $(,)?) => {
        $crate::log::fatal_values(&[$(&$val as &dyn ::std::fmt::Display),*])
    };
}
