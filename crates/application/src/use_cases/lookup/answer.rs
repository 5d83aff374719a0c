use mockdns_domain::{MxRecord, NsRecord, SrvLookup};
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupAnswer {
    Names(Vec<String>),
    Alias(String),
    Addresses(Vec<IpAddr>),
    Mail(Vec<MxRecord>),
    Nameservers(Vec<NsRecord>),
    Services(SrvLookup),
    Port(u16),
}

impl LookupAnswer {
    pub fn len(&self) -> usize {
        match self {
            LookupAnswer::Names(names) => names.len(),
            LookupAnswer::Alias(alias) => usize::from(!alias.is_empty()),
            LookupAnswer::Addresses(addrs) => addrs.len(),
            LookupAnswer::Mail(mx) => mx.len(),
            LookupAnswer::Nameservers(ns) => ns.len(),
            LookupAnswer::Services(srv) => srv.records.len(),
            LookupAnswer::Port(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Presentation lines, one per answer. MX and SRV use zone-file field
    /// order.
    pub fn lines(&self) -> Vec<String> {
        match self {
            LookupAnswer::Names(names) => names.clone(),
            LookupAnswer::Alias(alias) if alias.is_empty() => vec![],
            LookupAnswer::Alias(alias) => vec![alias.clone()],
            LookupAnswer::Addresses(addrs) => addrs.iter().map(IpAddr::to_string).collect(),
            LookupAnswer::Mail(mx) => mx
                .iter()
                .map(|record| format!("{} {}", record.pref, record.host))
                .collect(),
            LookupAnswer::Nameservers(ns) => ns.iter().map(|record| record.host.clone()).collect(),
            LookupAnswer::Services(srv) => srv
                .records
                .iter()
                .map(|record| {
                    format!(
                        "{} {} {} {}",
                        record.priority, record.weight, record.port, record.target
                    )
                })
                .collect(),
            LookupAnswer::Port(port) => vec![port.to_string()],
        }
    }
}
