use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use crate::zone::Zone;

const DEFAULT_CONFIG_FILE: &str = "mockdns.toml";

/// Main configuration structure for mockdns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// CNAME chasing behaviour
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Zone records keyed by domain name or reverse-lookup key, as written
    /// in the file (normalization happens when the table is built)
    #[serde(default)]
    pub zones: BTreeMap<String, Zone>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. mockdns.toml in current directory
    /// 3. Default configuration (no zones)
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(skip) = overrides.skip_cname {
            self.resolver.skip_cname = skip;
        }
        if let Some(hops) = overrides.max_cname_hops {
            self.resolver.max_cname_hops = hops;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.max_cname_hops == 0 {
            return Err(ConfigError::Validation(
                "max_cname_hops must be at least 1".to_string(),
            ));
        }

        if self.zones.keys().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "Zone name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub skip_cname: Option<bool>,
    pub max_cname_hops: Option<usize>,
    pub log_level: Option<String>,
}
