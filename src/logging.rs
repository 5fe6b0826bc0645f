use anyhow::Context;
use studentdesk_config::LogConfig;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber.
///
/// Console output goes to stderr so it does not interleave with the
/// rendered tables on stdout. `RUST_LOG` overrides `LOG_LEVEL` for the
/// console; the JSON file always records `info` and above.
pub fn init_tracing(config: &LogConfig) -> anyhow::Result<()> {
    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,{krate}={level},studentdesk_client={level},studentdesk_auth={level}",
            krate = env!("CARGO_CRATE_NAME"),
            level = config.level
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_filter(console_filter);

    let json_layer = if config.file_enabled {
        std::fs::create_dir_all(&config.dir)
            .with_context(|| format!("Failed to create log directory {}", config.dir))?;

        let appender = RollingFileAppender::new(Rotation::DAILY, &config.dir, "studentdesk.json");
        Some(
            fmt::layer()
                .json()
                .with_writer(appender)
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(EnvFilter::new("info")),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
