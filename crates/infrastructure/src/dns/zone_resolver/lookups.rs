use super::ZoneResolver;
use crate::system::ReverseName;
use async_trait::async_trait;
use mockdns_application::ports::Resolver;
use mockdns_domain::{LookupError, MxRecord, NsRecord, SrvLookup};
use std::net::IpAddr;
use tracing::debug;

#[async_trait]
impl Resolver for ZoneResolver {
    async fn lookup_addr(&self, addr: &str) -> Result<Vec<String>, LookupError> {
        let reverse_domain = ReverseName::from_address(addr)?;

        debug!(
            addr = %addr,
            reverse_domain = %reverse_domain,
            "Performing PTR lookup"
        );

        Ok(self.direct_zone(&reverse_domain)?.ptr.clone())
    }

    async fn lookup_cname(&self, host: &str) -> Result<String, LookupError> {
        let zone = self.direct_zone(host)?;
        Ok(zone.cname.clone().unwrap_or_default())
    }

    async fn lookup_host(&self, host: &str) -> Result<Vec<String>, LookupError> {
        let mut addrs = self.lookup_a(host)?;
        addrs.extend(self.lookup_aaaa(host)?);

        if addrs.is_empty() {
            return Err(LookupError::not_found(host));
        }

        debug!(host = %host, addresses = addrs.len(), "Host resolved from zone table");
        Ok(addrs)
    }

    async fn lookup_ip_addr(&self, host: &str) -> Result<Vec<IpAddr>, LookupError> {
        self.lookup_host(host)
            .await?
            .into_iter()
            .map(|addr| {
                addr.parse::<IpAddr>()
                    .map_err(|_| LookupError::MalformedRecord(addr))
            })
            .collect()
    }

    async fn lookup_mx(&self, name: &str) -> Result<Vec<MxRecord>, LookupError> {
        Ok(self.resolve_target(name)?.zone.mx.clone())
    }

    async fn lookup_ns(&self, name: &str) -> Result<Vec<NsRecord>, LookupError> {
        Ok(self.resolve_target(name)?.zone.ns.clone())
    }

    async fn lookup_srv(
        &self,
        service: &str,
        proto: &str,
        name: &str,
    ) -> Result<SrvLookup, LookupError> {
        let query = format!("_{}._{}.{}", service, proto, name);
        let resolution = self.resolve_target(&query)?;

        Ok(SrvLookup {
            cname: resolution.alias.map(str::to_string),
            records: resolution.zone.srv.clone(),
        })
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        Ok(self.resolve_target(name)?.zone.txt.clone())
    }

    async fn lookup_port(&self, network: &str, service: &str) -> Result<u16, LookupError> {
        self.port_lookup.lookup_port(network, service).await
    }
}
