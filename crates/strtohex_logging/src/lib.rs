#![deny(missing_docs)]
//! Shared logging utilities for the strtohex workspace.
//!
//! This crate provides the `strtohex_debug` macro used by the core, the
//! stderr logger used by the binary, and a minimal test initializer for the
//! global logger.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

// Re-exported so the macro resolves without callers depending on `log`.
#[doc(hidden)]
pub use log as __log;

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! strtohex_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!($($arg)*);
    }};
}

/// Initializes a terminal logger that writes every record to stderr.
///
/// Stdout carries the program's report, so log output must never land there.
/// Returns `false` if a global logger was already installed.
pub fn initialize_stderr(level: LevelFilter) -> bool {
    TermLogger::init(level, build_config(), TerminalMode::Stderr, ColorChoice::Auto).is_ok()
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}
