use color_eyre::Result;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,menu_core=info,menu_board=info";
const DEBUG_FILTER: &str = "info,menu_core=debug,menu_board=debug";

fn filter(debug: bool) -> Result<EnvFilter> {
    let fallback = if debug { DEBUG_FILTER } else { DEFAULT_FILTER };
    let directives = std::env::var("RUST_LOG").unwrap_or_else(|_| fallback.to_string());
    Ok(EnvFilter::try_new(directives)?)
}

/// Logs to a daily file. Used while the terminal is in raw mode, where
/// anything written to stderr would tear the screen.
pub fn init_file_logger(log_dir: &Path, debug: bool) -> Result<WorkerGuard> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("menu-board")
        .filename_suffix("log")
        .build(log_dir)?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter(debug)?)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_level(true)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(guard)
}

/// Logs to stderr, for headless runs.
pub fn init_stderr_logger(debug: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(filter(debug)?)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .try_init()?;

    Ok(())
}
