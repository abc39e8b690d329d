use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system with both console and file output.
///
/// The returned guard must stay alive for the duration of the run so the
/// file writer flushes before the process exits.
pub fn init_logging() -> WorkerGuard {
    // Ensure logs directory exists
    let _ = fs::create_dir_all("logs");

    // Non-blocking appender with daily rotation
    let file_appender = tracing_appender::rolling::daily("logs", "preprocess.log");
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    // JSON to the file, human-readable to the console
    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    // Install the global subscriber
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("ddx_preprocess=info".parse().unwrap()))
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
