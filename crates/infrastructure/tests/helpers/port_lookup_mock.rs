#![allow(dead_code)]
use async_trait::async_trait;
use mockdns_application::ports::ServicePortLookup;
use mockdns_domain::LookupError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Port lookup with a fixed service table that records every query.
#[derive(Default)]
pub struct StaticPortLookup {
    ports: HashMap<(String, String), u16>,
    queries: Mutex<Vec<(String, String)>>,
}

impl StaticPortLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_port(mut self, network: &str, service: &str, port: u16) -> Self {
        self.ports
            .insert((network.to_string(), service.to_string()), port);
        self
    }

    pub fn queries(&self) -> Vec<(String, String)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ServicePortLookup for StaticPortLookup {
    async fn lookup_port(&self, network: &str, service: &str) -> Result<u16, LookupError> {
        self.queries
            .lock()
            .unwrap()
            .push((network.to_string(), service.to_string()));

        self.ports
            .get(&(network.to_string(), service.to_string()))
            .copied()
            .ok_or_else(|| LookupError::UnknownPort {
                network: network.to_string(),
                service: service.to_string(),
            })
    }
}
