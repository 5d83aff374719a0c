use async_trait::async_trait;
use mockdns_domain::LookupError;

/// Maps a service name to its port for a network, the way the host
/// environment does (`/etc/services` on Unix).
#[async_trait]
pub trait ServicePortLookup: Send + Sync {
    async fn lookup_port(&self, network: &str, service: &str) -> Result<u16, LookupError>;
}
