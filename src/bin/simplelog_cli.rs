use std::{env, fmt, process};

use simplelog::{LogLevel, log};

/// Exit status for bad command-line usage or a rejected threshold.
const USAGE_EXIT_CODE: i32 = 2;

/// Which public entry point carries the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// `log::write` with one formatted message.
    Formatted,
    /// `log::write_values` with each word as a value.
    Values,
    /// `log_<level>!` macros.
    Macro,
    /// `log_<level>_ln!` macros, given the joined words and the word count.
    MacroValues,
    /// `log::fatal`, regardless of LEVEL.
    Terminal,
    /// `log::fatal_values`, regardless of LEVEL.
    TerminalValues,
}

impl Mode {
    fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "--values" => Some(Mode::Values),
            "--macro" => Some(Mode::Macro),
            "--macro-values" => Some(Mode::MacroValues),
            "--terminal" => Some(Mode::Terminal),
            "--terminal-values" => Some(Mode::TerminalValues),
            _ => None,
        }
    }
}

fn usage(prog: &str) -> ! {
    eprintln!("Usage:");
    eprintln!("  {prog} <THRESHOLD> <LEVEL> [MODE] <WORDS...>");
    eprintln!();
    eprintln!("  THRESHOLD  rank between 0 (DEBUG) and 4 (FATAL), or '-' to keep the default");
    eprintln!("  LEVEL      debug | info | warning | error | fatal");
    eprintln!("  MODE       (none)             log::write with WORDS as one message");
    eprintln!("             --values           log::write_values with each word as a value");
    eprintln!("             --macro            log_<level>! macro");
    eprintln!("             --macro-values     log_<level>_ln! macro with WORDS and their count");
    eprintln!("             --terminal         log::fatal (LEVEL is ignored)");
    eprintln!("             --terminal-values  log::fatal_values (LEVEL is ignored)");
    process::exit(USAGE_EXIT_CODE);
}

fn via_macro(level: LogLevel, text: &str) {
    match level {
        LogLevel::Debug => simplelog::log_debug!("{text}"),
        LogLevel::Info => simplelog::log_info!("{text}"),
        LogLevel::Warning => simplelog::log_warning!("{text}"),
        LogLevel::Error => simplelog::log_error!("{text}"),
        LogLevel::Fatal => simplelog::log_fatal!("{text}"),
    }
}

fn via_macro_values(level: LogLevel, text: &str, count: usize) {
    match level {
        LogLevel::Debug => simplelog::log_debug_ln!(text, count),
        LogLevel::Info => simplelog::log_info_ln!(text, count),
        LogLevel::Warning => simplelog::log_warning_ln!(text, count),
        LogLevel::Error => simplelog::log_error_ln!(text, count),
        LogLevel::Fatal => simplelog::log_fatal_ln!(text, count),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let prog = args.first().map_or("simplelog-cli", String::as_str);

    if args.len() < 3 {
        usage(prog);
    }

    // --- Threshold ---------------------------------------------------------
    if args[1] != "-" {
        let Ok(rank) = args[1].parse::<i64>() else {
            usage(prog);
        };
        if let Err(e) = log::set_threshold(rank) {
            eprintln!("{e} (threshold stays {})", log::threshold());
            process::exit(USAGE_EXIT_CODE);
        }
    }

    let Some(level) = LogLevel::from_name(&args[2]) else {
        usage(prog);
    };

    // --- Message -----------------------------------------------------------
    let (mode, words) = match args.get(3).and_then(|flag| Mode::from_flag(flag)) {
        Some(mode) => (mode, &args[4..]),
        None => (Mode::Formatted, &args[3..]),
    };
    let values: Vec<&dyn fmt::Display> = words.iter().map(|w| w as &dyn fmt::Display).collect();
    let text = words.join(" ");

    match mode {
        Mode::Formatted => {
            log::write(level, format_args!("{text}"));
        }
        Mode::Values => {
            log::write_values(level, &values);
        }
        Mode::Macro => via_macro(level, &text),
        Mode::MacroValues => via_macro_values(level, &text, words.len()),
        Mode::Terminal => log::fatal(format_args!("{text}")),
        Mode::TerminalValues => log::fatal_values(&values),
    }
}
