use mockdns_domain::{CliOverrides, Config};

/// Runs before logging is initialised, so failures are only reported through
/// the returned error.
pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides).map_err(|e| anyhow::anyhow!(e))?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;
    Ok(config)
}
