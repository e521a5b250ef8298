use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_appender::non_blocking::WorkerGuard;
use crate::config::LoggingSettings;
use crate::errors::{CheckInError, CheckInResult};

/// Initializes the logging system for the application
///
/// This function sets up the logging subscriber and layers based on the provided configuration
/// It supports logging to the console and, when a directory is configured, to a log file
/// The log file is named `dock-checkin_{current_date}.log` unless `logging.file` overrides it
/// The logging level comes from `RUST_LOG` or, failing that, `logging.level`
///
/// # Arguments
///
/// * `settings`: The logging section of the application settings
///
/// # Returns
///
/// * `Ok(Some(WorkerGuard))`: If logging is initialized with a file appender; keep the guard alive
/// * `Ok(None)`: If logging is initialized without a file appender (console only)
/// * `Err(CheckInError::LoggingError)`: If the subscriber could not be installed
pub fn init_logger(settings: &LoggingSettings) -> CheckInResult<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| CheckInError::LoggingError(e.to_string()))?;

    let format = fmt::format()
        .with_timer(fmt::time::LocalTime::rfc_3339())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if let Some(path) = settings.path.clone() {
        std::fs::create_dir_all(&path)?;

        let file_name = log_file_name(settings.file.as_deref());
        let file_appender = RollingFileAppender::new(Rotation::NEVER, &path, &file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = fmt::Layer::default()
            .event_format(format.clone())
            .with_writer(non_blocking);

        // The console doubles as the operator's screen, so log lines go to stderr.
        let console_layer = fmt::Layer::default()
            .event_format(format.with_ansi(true))
            .with_writer(std::io::stderr);

        tracing::subscriber::set_global_default(subscriber.with(file_layer).with(console_layer))
            .map_err(|e| CheckInError::LoggingError(e.to_string()))?;

        tracing::info!("Logging initialized successfully ({:?})", path.join(&file_name));
        Ok(Some(guard))
    } else {
        let console_layer = fmt::Layer::default()
            .event_format(format.with_ansi(true))
            .with_writer(std::io::stderr);

        tracing::subscriber::set_global_default(subscriber.with(console_layer))
            .map_err(|e| CheckInError::LoggingError(e.to_string()))?;

        tracing::info!("Logging initialized successfully (console only)");
        Ok(None)
    }
}

fn log_file_name(configured: Option<&str>) -> String {
    match configured {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("dock-checkin_{}.log", chrono::Local::now().format("%Y-%m-%d")),
    }
}
