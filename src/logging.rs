use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming a log file; when unset, logs go to stderr.
pub const LOG_FILE_ENV: &str = "CATBROWSE_LOG";
/// Env var holding the filter directive (default `warn`).
pub const LOG_LEVEL_ENV: &str = "CATBROWSE_LOG_LEVEL";

/// Default filter on stderr. Normalized request errors are already printed
/// once by the caller, so the interceptor stays quiet there.
const STDERR_DEFAULT_FILTER: &str = "warn,catbrowse::api::interceptor=off";
const FILE_DEFAULT_FILTER: &str = "warn";

fn filter_for(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize tracing.
///
/// Log files get unique names, `{path}.{timestamp}.{pid}`, so concurrent
/// invocations never interleave.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_FILE_ENV).ok() else {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true);
        let _ = tracing_subscriber::registry()
            .with(filter_for(STDERR_DEFAULT_FILTER))
            .with(stderr_layer)
            .try_init();
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let _ = tracing_subscriber::registry()
        .with(filter_for(FILE_DEFAULT_FILTER))
        .with(file_layer)
        .try_init();
}
