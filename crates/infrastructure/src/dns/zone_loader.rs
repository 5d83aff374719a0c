use crate::dns::ZoneResolver;
use hickory_proto::rr::Name;
use mockdns_domain::{Config, ConfigError, Zone, ZoneTable};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Builds zone tables and resolvers from configuration.
pub struct ZoneLoader;

impl ZoneLoader {
    pub fn resolver_from_config(config: &Config) -> Result<ZoneResolver, ConfigError> {
        config.validate()?;
        let table = Self::build_table(&config.zones)?;

        info!(
            zones = table.len(),
            skip_cname = config.resolver.skip_cname,
            max_cname_hops = config.resolver.max_cname_hops,
            "Zone table loaded"
        );

        Ok(ZoneResolver::new(table).with_config(&config.resolver))
    }

    /// Checks zone names and CNAME targets are valid domain names and builds
    /// the normalized table. Names that collide after normalization keep the
    /// later entry.
    pub fn build_table(zones: &BTreeMap<String, Zone>) -> Result<ZoneTable, ConfigError> {
        let mut builder = ZoneTable::builder();

        for (name, zone) in zones {
            Self::validate_name(name)?;
            if let Some(target) = zone.cname_target() {
                Self::validate_name(target)?;
            }

            if builder.insert(name, zone.clone()).is_some() {
                warn!(
                    zone = %name,
                    "Zone name collides with an earlier entry after normalization; keeping this one"
                );
            }
        }

        Ok(builder.build())
    }

    fn validate_name(name: &str) -> Result<(), ConfigError> {
        Name::from_ascii(name)
            .map(|_| ())
            .map_err(|e| ConfigError::Validation(format!("Invalid domain name '{}': {}", name, e)))
    }
}
