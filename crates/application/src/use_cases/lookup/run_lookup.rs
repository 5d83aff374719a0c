use super::{LookupAnswer, LookupRequest};
use crate::ports::Resolver;
use mockdns_domain::LookupError;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Dispatches a [`LookupRequest`] to whichever resolver it was built with.
pub struct LookupUseCase {
    resolver: Arc<dyn Resolver>,
}

impl LookupUseCase {
    pub fn new(resolver: Arc<dyn Resolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, request: &LookupRequest) -> Result<LookupAnswer, LookupError> {
        let start = Instant::now();

        let result = match request {
            LookupRequest::Addr { address } => {
                self.resolver.lookup_addr(address).await.map(LookupAnswer::Names)
            }
            LookupRequest::Cname { host } => {
                self.resolver.lookup_cname(host).await.map(LookupAnswer::Alias)
            }
            LookupRequest::Host { host } => {
                self.resolver.lookup_host(host).await.map(LookupAnswer::Names)
            }
            LookupRequest::Ip { family, host } => self
                .resolver
                .lookup_ip(*family, host)
                .await
                .map(LookupAnswer::Addresses),
            LookupRequest::Mx { name } => self.resolver.lookup_mx(name).await.map(LookupAnswer::Mail),
            LookupRequest::Ns { name } => self
                .resolver
                .lookup_ns(name)
                .await
                .map(LookupAnswer::Nameservers),
            LookupRequest::Srv {
                service,
                proto,
                name,
            } => self
                .resolver
                .lookup_srv(service, proto, name)
                .await
                .map(LookupAnswer::Services),
            LookupRequest::Txt { name } => {
                self.resolver.lookup_txt(name).await.map(LookupAnswer::Names)
            }
            LookupRequest::Port { network, service } => self
                .resolver
                .lookup_port(network, service)
                .await
                .map(LookupAnswer::Port),
        };

        match &result {
            Ok(answer) => debug!(
                kind = request.kind(),
                subject = request.subject(),
                answers = answer.len(),
                elapsed_us = start.elapsed().as_micros() as u64,
                "Lookup answered"
            ),
            Err(e) => debug!(
                kind = request.kind(),
                subject = request.subject(),
                error = %e,
                not_found = e.is_not_found(),
                "Lookup failed"
            ),
        }

        result
    }
}
