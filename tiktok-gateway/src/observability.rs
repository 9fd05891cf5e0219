//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `service.log_level`. Output is JSON
/// unless `service.log_format` is `pretty`. Calling this twice keeps the
/// first subscriber.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.service.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.service.log_format.as_str() {
        "pretty" => builder.pretty().try_init(),
        _ => builder.json().try_init(),
    };

    if installed.is_ok() {
        tracing::info!("Tracing initialized for service: {}", config.service.name);
    }
}
