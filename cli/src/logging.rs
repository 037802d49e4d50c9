use std::path::PathBuf;
use std::sync::OnceLock;

use sssd_suite_core::config::{get_data_dir, LoggingConfig};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the file writer flushing until the process exits.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Installs the global subscriber for harness diagnostics.
///
/// Progress lines shown to the user go through the console, not here.
pub fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }
    if !logging.console && !logging.file {
        return Err("[logging] is enabled but neither console nor file output is".to_string());
    }

    let file_layer = if logging.file {
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(open_log_file(logging)?)
                .with_ansi(false),
        )
    } else {
        None
    };
    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(level_filter(&logging.level)?)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| format!("cannot install log subscriber: {e}"))
}

/// `RUST_LOG` when set, the configured level otherwise.
fn level_filter(level: &str) -> Result<EnvFilter, String> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(v) if !v.trim().is_empty() => Ok(EnvFilter::from_default_env()),
        _ => EnvFilter::try_new(level).map_err(|e| format!("invalid log level '{level}': {e}")),
    }
}

/// One file per run: `<dir>/sssd-test-suite.<pid>.log`.
fn open_log_file(logging: &LoggingConfig) -> Result<NonBlocking, String> {
    let dir = log_dir(logging)?;
    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("cannot create log directory {}: {e}", dir.display()))?;

    let appender = tracing_appender::rolling::never(
        dir,
        format!("sssd-test-suite.{}.log", std::process::id()),
    );
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = FILE_GUARD.set(guard);
    Ok(writer)
}

fn log_dir(logging: &LoggingConfig) -> Result<PathBuf, String> {
    let configured = logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    match configured {
        Some(d) => Ok(PathBuf::from(d)),
        None => get_data_dir()
            .map(|d| d.join("logs"))
            .map_err(|e| format!("no log directory configured: {e}")),
    }
}
