use std::fs;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use samaysetu_config::LogConfig;

/// Installs the console layer and the two rolling log files.
///
/// The console shows warnings and above unless `RUST_LOG` says otherwise, so
/// command output stays readable. The JSON file records at `LOG_LEVEL`.
pub fn init_tracing(config: &LogConfig) -> anyhow::Result<()> {
    fs::create_dir_all(&config.directory)?;

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{}=warn,reqwest=warn", env!("CARGO_CRATE_NAME")))
    });

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .with_filter(console_filter);

    // Errors only
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.directory, "samaysetu.log");

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_filter(EnvFilter::new("error"));

    let json_appender =
        RollingFileAppender::new(Rotation::DAILY, &config.directory, "samaysetu.json");

    let json_layer = fmt::layer()
        .json()
        .with_writer(json_appender)
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .try_init()?;

    Ok(())
}
