//! Logging utilities for the Little Lemon services.
//!
//! Every crate logs through `tracing`; binaries call one of the `init*`
//! functions once at startup to install the subscriber.

use tracing::{error, info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix for the rolling log file.
const LOG_FILE_PREFIX: &str = "little-lemon.log";

/// Initialize the tracing subscriber at INFO level.
///
/// # Examples
///
/// ```
/// use little_lemon_common::logging;
///
/// logging::init();
/// logging::init_with_level(tracing::Level::DEBUG); // no-op, already initialized
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
pub fn init_with_level(level: Level) {
    // Console only, so there is no guard to keep alive
    let _ = init_with_file(level, None);
}

/// Initialize the tracing subscriber, optionally mirroring output into a
/// daily rolling file under `directory`.
///
/// `RUST_LOG` takes precedence over `level` when it is set. The returned guard
/// must be held for as long as file logging should keep flushing.
pub fn init_with_file(level: Level, directory: Option<&str>) -> Option<WorkerGuard> {
    let (file_layer, guard) = match directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    // try_init: a global subscriber may already be installed (tests, repeated calls)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(file_layer)
        .with(build_filter(level))
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
    guard
}

fn build_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,little_lemon={level},tower_http={level}"))
    })
}

/// Parse a level name such as `"debug"`; unknown names fall back to INFO.
pub fn parse_level(name: &str) -> Level {
    name.trim().parse().unwrap_or(Level::INFO)
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so the call can sit inside a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
