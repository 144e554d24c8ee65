//! Tracing setup for the `forge` binary.

use std::path::Path;

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "forge.log";

/// Install the global subscriber.
///
/// `RUST_LOG` drives the filter, defaulting to `info`. Logs always go to
/// stderr; with a `log_dir` they are also appended to `forge.log` there.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            // Leak the guard to keep file writer alive
            std::mem::forget(guard);

            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking_file)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::debug!("Log file: {}/{}", dir.display(), LOG_FILE);
    }
    Ok(())
}
