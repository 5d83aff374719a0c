#![allow(dead_code)]

use async_trait::async_trait;
use mockdns_application::ports::Resolver;
use mockdns_domain::{LookupError, MxRecord, NsRecord, SrvLookup, SrvRecord};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Canned-answer resolver keyed by the exact string each method receives.
#[derive(Clone, Default)]
pub struct MockResolver {
    names: Arc<RwLock<HashMap<String, Vec<String>>>>,
    aliases: Arc<RwLock<HashMap<String, String>>>,
    mx: Arc<RwLock<HashMap<String, Vec<MxRecord>>>>,
    ns: Arc<RwLock<HashMap<String, Vec<NsRecord>>>>,
    srv: Arc<RwLock<HashMap<String, Vec<SrvRecord>>>>,
    ports: Arc<RwLock<HashMap<String, u16>>>,
    errors: Arc<RwLock<HashMap<String, LookupError>>>,
    calls: Arc<AtomicUsize>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_names(&self, key: &str, names: Vec<&str>) {
        self.names
            .write()
            .await
            .insert(key.to_string(), names.into_iter().map(String::from).collect());
    }

    pub async fn set_alias(&self, host: &str, alias: &str) {
        self.aliases
            .write()
            .await
            .insert(host.to_string(), alias.to_string());
    }

    pub async fn set_mx(&self, name: &str, records: Vec<MxRecord>) {
        self.mx.write().await.insert(name.to_string(), records);
    }

    pub async fn set_ns(&self, name: &str, records: Vec<NsRecord>) {
        self.ns.write().await.insert(name.to_string(), records);
    }

    pub async fn set_srv(&self, query: &str, records: Vec<SrvRecord>) {
        self.srv.write().await.insert(query.to_string(), records);
    }

    pub async fn set_port(&self, service: &str, port: u16) {
        self.ports.write().await.insert(service.to_string(), port);
    }

    pub async fn set_error(&self, key: &str, error: LookupError) {
        self.errors.write().await.insert(key.to_string(), error);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    async fn check(&self, key: &str) -> Result<(), LookupError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match self.errors.read().await.get(key) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn names_for(&self, key: &str) -> Result<Vec<String>, LookupError> {
        self.check(key).await?;
        self.names
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| LookupError::not_found(key))
    }
}

#[async_trait]
impl Resolver for MockResolver {
    async fn lookup_addr(&self, addr: &str) -> Result<Vec<String>, LookupError> {
        self.names_for(addr).await
    }

    async fn lookup_cname(&self, host: &str) -> Result<String, LookupError> {
        self.check(host).await?;
        Ok(self.aliases.read().await.get(host).cloned().unwrap_or_default())
    }

    async fn lookup_host(&self, host: &str) -> Result<Vec<String>, LookupError> {
        self.names_for(host).await
    }

    async fn lookup_ip_addr(&self, host: &str) -> Result<Vec<IpAddr>, LookupError> {
        self.names_for(host)
            .await?
            .iter()
            .map(|addr| {
                addr.parse::<IpAddr>()
                    .map_err(|_| LookupError::MalformedRecord(addr.clone()))
            })
            .collect()
    }

    async fn lookup_mx(&self, name: &str) -> Result<Vec<MxRecord>, LookupError> {
        self.check(name).await?;
        self.mx
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::not_found(name))
    }

    async fn lookup_ns(&self, name: &str) -> Result<Vec<NsRecord>, LookupError> {
        self.check(name).await?;
        self.ns
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::not_found(name))
    }

    async fn lookup_srv(
        &self,
        service: &str,
        proto: &str,
        name: &str,
    ) -> Result<SrvLookup, LookupError> {
        let query = format!("_{}._{}.{}", service, proto, name);
        self.check(&query).await?;
        let records = self
            .srv
            .read()
            .await
            .get(&query)
            .cloned()
            .ok_or_else(|| LookupError::not_found(query.as_str()))?;
        Ok(SrvLookup {
            cname: None,
            records,
        })
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.names_for(name).await
    }

    async fn lookup_port(&self, network: &str, service: &str) -> Result<u16, LookupError> {
        self.check(service).await?;
        self.ports
            .read()
            .await
            .get(service)
            .copied()
            .ok_or_else(|| LookupError::UnknownPort {
                network: network.to_string(),
                service: service.to_string(),
            })
    }
}
