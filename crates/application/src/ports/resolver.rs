use async_trait::async_trait;
use mockdns_domain::{LookupError, MxRecord, NsRecord, SrvLookup};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// Address family filter for [`Resolver::lookup_ip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IpFamily {
    #[default]
    Any,
    V4,
    V6,
}

impl IpFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            IpFamily::Any => "ip",
            IpFamily::V4 => "ip4",
            IpFamily::V6 => "ip6",
        }
    }

    pub fn matches(&self, addr: &IpAddr) -> bool {
        match self {
            IpFamily::Any => true,
            IpFamily::V4 => addr.is_ipv4(),
            IpFamily::V6 => addr.is_ipv6(),
        }
    }
}

impl FromStr for IpFamily {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ip" => Ok(IpFamily::Any),
            "ip4" => Ok(IpFamily::V4),
            "ip6" => Ok(IpFamily::V6),
            other => Err(LookupError::UnknownNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for IpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The lookup surface shared by every resolver, table-driven or networked,
/// so code under test can take any of them.
///
/// Returned records are owned; modifying them never affects the resolver.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Reverse lookup: hostnames for an address.
    async fn lookup_addr(&self, addr: &str) -> Result<Vec<String>, LookupError>;

    /// The canonical name `host` is an alias for, empty if it has none.
    async fn lookup_cname(&self, host: &str) -> Result<String, LookupError>;

    /// A then AAAA addresses of `host`, as text.
    async fn lookup_host(&self, host: &str) -> Result<Vec<String>, LookupError>;

    async fn lookup_ip_addr(&self, host: &str) -> Result<Vec<IpAddr>, LookupError>;

    async fn lookup_mx(&self, name: &str) -> Result<Vec<MxRecord>, LookupError>;

    async fn lookup_ns(&self, name: &str) -> Result<Vec<NsRecord>, LookupError>;

    /// SRV records for `_{service}._{proto}.{name}`.
    async fn lookup_srv(
        &self,
        service: &str,
        proto: &str,
        name: &str,
    ) -> Result<SrvLookup, LookupError>;

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError>;

    async fn lookup_port(&self, network: &str, service: &str) -> Result<u16, LookupError>;

    /// Addresses of `host` restricted to one family.
    async fn lookup_ip(&self, family: IpFamily, host: &str) -> Result<Vec<IpAddr>, LookupError> {
        let addrs: Vec<IpAddr> = self
            .lookup_ip_addr(host)
            .await?
            .into_iter()
            .filter(|addr| family.matches(addr))
            .collect();

        if addrs.is_empty() {
            return Err(LookupError::not_found(host));
        }
        Ok(addrs)
    }
}
