use clap::Subcommand;
use mockdns_application::ports::IpFamily;
use mockdns_application::use_cases::LookupRequest;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// A and AAAA addresses of a host
    Host { host: String },

    /// Parsed addresses of a host, optionally restricted to one family
    Ip {
        host: String,

        /// ip, ip4 or ip6
        #[arg(short, long, default_value = "ip")]
        network: String,
    },

    /// Canonical name a host is an alias for
    Cname { host: String },

    /// Hostnames for an address (PTR)
    Addr { address: String },

    /// Mail exchangers
    Mx { name: String },

    /// Name servers
    Ns { name: String },

    /// Service records for _SERVICE._PROTO.NAME
    Srv {
        service: String,
        proto: String,
        name: String,
    },

    /// Text records
    Txt { name: String },

    /// Port number of a service
    Port {
        service: String,

        /// tcp, tcp4, tcp6, udp, udp4 or udp6
        #[arg(short, long, default_value = "tcp")]
        network: String,
    },
}

impl Command {
    pub fn into_request(self) -> anyhow::Result<LookupRequest> {
        let request = match self {
            Command::Host { host } => LookupRequest::Host { host },
            Command::Ip { host, network } => LookupRequest::Ip {
                family: network.parse::<IpFamily>()?,
                host,
            },
            Command::Cname { host } => LookupRequest::Cname { host },
            Command::Addr { address } => LookupRequest::Addr { address },
            Command::Mx { name } => LookupRequest::Mx { name },
            Command::Ns { name } => LookupRequest::Ns { name },
            Command::Srv {
                service,
                proto,
                name,
            } => LookupRequest::Srv {
                service,
                proto,
                name,
            },
            Command::Txt { name } => LookupRequest::Txt { name },
            Command::Port { service, network } => LookupRequest::Port { network, service },
        };
        Ok(request)
    }
}
