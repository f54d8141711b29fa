//! Tracing bootstrap
//!
//! Diagnostics go to stderr so they never interleave with the menu protocol
//! on stdout. `RUST_LOG` takes precedence over the configured level.

use tracing::Subscriber;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{LogFormat, Settings};

/// Initialize tracing for the application
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(settings: &Settings) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing::subscriber::set_global_default(build_subscriber(filter, settings.log_format)).is_ok()
}

fn build_subscriber(filter: EnvFilter, format: LogFormat) -> Box<dyn Subscriber + Send + Sync> {
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => Box::new(
            registry.with(
                fmt::layer()
                    .json()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            ),
        ),
        LogFormat::Compact => Box::new(
            registry.with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            ),
        ),
        LogFormat::Pretty => {
            Box::new(registry.with(fmt::layer().with_target(false).with_writer(std::io::stderr)))
        }
    }
}
