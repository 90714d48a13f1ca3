use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE: &str = "converter.log";

/// Logs go to `log_dir/converter.log` only; the terminal belongs to the UI.
///
/// Keep the returned guard alive until exit so buffered lines get flushed.
pub fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,currency_converter_tui=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(non_blocking_file),
        )
        .init();

    info!("Logging to {}", log_dir.join(LOG_FILE).display());

    Ok(guard)
}
