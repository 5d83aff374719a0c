use crate::ports::IpFamily;

/// One lookup against a [`Resolver`](crate::ports::Resolver), as issued by
/// the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    Addr { address: String },
    Cname { host: String },
    Host { host: String },
    Ip { family: IpFamily, host: String },
    Mx { name: String },
    Ns { name: String },
    Srv { service: String, proto: String, name: String },
    Txt { name: String },
    Port { network: String, service: String },
}

impl LookupRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            LookupRequest::Addr { .. } => "PTR",
            LookupRequest::Cname { .. } => "CNAME",
            LookupRequest::Host { .. } => "HOST",
            LookupRequest::Ip { .. } => "IP",
            LookupRequest::Mx { .. } => "MX",
            LookupRequest::Ns { .. } => "NS",
            LookupRequest::Srv { .. } => "SRV",
            LookupRequest::Txt { .. } => "TXT",
            LookupRequest::Port { .. } => "PORT",
        }
    }

    /// The name, address or service the request is about.
    pub fn subject(&self) -> &str {
        match self {
            LookupRequest::Addr { address } => address,
            LookupRequest::Cname { host }
            | LookupRequest::Host { host }
            | LookupRequest::Ip { host, .. } => host,
            LookupRequest::Mx { name }
            | LookupRequest::Ns { name }
            | LookupRequest::Srv { name, .. }
            | LookupRequest::Txt { name } => name,
            LookupRequest::Port { service, .. } => service,
        }
    }
}
