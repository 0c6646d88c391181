use anyhow::Context;
use configuration::LoggingSettings;
use tracing::Dispatch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_PREFIX: &str = "frontier.log";

/// Builds the log dispatcher for one invocation.
///
/// Events go to stderr, and additionally to a daily rolling file when
/// `settings.directory` is set. `RUST_LOG` takes precedence over
/// `settings.level`. The returned guard must be held until the run ends so the
/// file writer can flush.
pub fn build_dispatch(
    settings: &LoggingSettings,
) -> anyhow::Result<(Dispatch, Option<WorkerGuard>)> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .with_context(|| format!("invalid log level '{}'", settings.level))?;

    let (file_layer, guard) = match &settings.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer);

    Ok((Dispatch::new(subscriber), guard))
}
