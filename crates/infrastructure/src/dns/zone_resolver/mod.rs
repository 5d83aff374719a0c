mod core;
mod lookups;

pub use self::core::Resolution;

use crate::system::SystemServicePorts;
use mockdns_application::ports::ServicePortLookup;
use mockdns_domain::config::resolver::DEFAULT_MAX_CNAME_HOPS;
use mockdns_domain::{ResolverConfig, ZoneTable};
use std::sync::Arc;
use tracing::debug;

/// Resolver answering every lookup from a static [`ZoneTable`].
///
/// The table is shared, never copied: callers keep their own `Arc` and may
/// inspect it while the resolver is in use. Port lookups are delegated to a
/// [`ServicePortLookup`], the host's services database by default.
pub struct ZoneResolver {
    zones: Arc<ZoneTable>,
    skip_cname: bool,
    max_cname_hops: usize,
    port_lookup: Arc<dyn ServicePortLookup>,
}

impl ZoneResolver {
    pub fn new(zones: impl Into<Arc<ZoneTable>>) -> Self {
        let zones = zones.into();
        debug!(zones = zones.len(), "Zone resolver created");

        Self {
            zones,
            skip_cname: false,
            max_cname_hops: DEFAULT_MAX_CNAME_HOPS,
            port_lookup: Arc::new(SystemServicePorts::new()),
        }
    }

    /// Stop following CNAMEs in record lookups. The first alias is still
    /// reported.
    pub fn with_skip_cname(mut self, skip_cname: bool) -> Self {
        self.skip_cname = skip_cname;
        self
    }

    /// Maximum CNAME links followed. Values below 1 are raised to 1.
    pub fn with_max_cname_hops(mut self, max_cname_hops: usize) -> Self {
        self.max_cname_hops = max_cname_hops.max(1);
        self
    }

    pub fn with_config(self, config: &ResolverConfig) -> Self {
        self.with_skip_cname(config.skip_cname)
            .with_max_cname_hops(config.max_cname_hops)
    }

    pub fn with_port_lookup(mut self, port_lookup: Arc<dyn ServicePortLookup>) -> Self {
        self.port_lookup = port_lookup;
        self
    }

    pub fn zones(&self) -> &Arc<ZoneTable> {
        &self.zones
    }

    pub fn skip_cname(&self) -> bool {
        self.skip_cname
    }

    pub fn max_cname_hops(&self) -> usize {
        self.max_cname_hops
    }
}
