use mockdns_domain::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so lookup answers on stdout stay machine-readable.
/// `RUST_LOG` overrides the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
