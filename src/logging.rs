//! Centralized logging setup
//!
//! The live table owns the terminal, so logs go to a file by default. Stderr
//! output can be added when the table is not being drawn there.

use std::path::Path;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Log file used when none is given
pub const DEFAULT_LOG_FILE: &str = "progress-table.log";

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

/// Initialize logging to `log_file`, optionally mirrored to stderr
///
/// Both outputs use the same log level from RUST_LOG environment variable.
/// Defaults to "info" level if RUST_LOG is not set.
///
/// The _guard is forgotten to keep the file appender alive for the program lifetime.
pub fn init_logging(log_file: &Path, to_stderr: bool) {
    let directory = match log_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = log_file
        .file_name()
        .map_or_else(|| DEFAULT_LOG_FILE.into(), |name| name.to_os_string());

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = to_stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .with_filter(env_filter())
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter()),
        )
        .with(stderr_layer)
        .init();

    // Keep guard alive for the program lifetime
    std::mem::forget(_guard);
}
