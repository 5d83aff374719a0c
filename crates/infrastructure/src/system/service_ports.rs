use async_trait::async_trait;
use mockdns_application::ports::ServicePortLookup;
use mockdns_domain::LookupError;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, warn};

/// Well-known services answered even without a services database.
const BUILTIN_SERVICES: &[(&str, &str, u16)] = &[
    ("tcp", "ftp", 21),
    ("tcp", "ftps", 990),
    ("tcp", "gopher", 70),
    ("tcp", "http", 80),
    ("tcp", "https", 443),
    ("tcp", "imap2", 143),
    ("tcp", "imap3", 220),
    ("tcp", "imaps", 993),
    ("tcp", "pop3", 110),
    ("tcp", "pop3s", 995),
    ("tcp", "smtp", 25),
    ("tcp", "submissions", 465),
    ("tcp", "ssh", 22),
    ("tcp", "telnet", 23),
    ("udp", "domain", 53),
];

/// Service port lookup backed by the host's services database
/// (`/etc/services`), with a built-in table of well-known services.
pub struct SystemServicePorts {
    services_path: PathBuf,
}

impl SystemServicePorts {
    pub fn new() -> Self {
        Self {
            services_path: PathBuf::from("/etc/services"),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            services_path: path.into(),
        }
    }

    fn protocols(network: &str) -> Result<&'static [&'static str], LookupError> {
        match network {
            "tcp" | "tcp4" | "tcp6" => Ok(&["tcp"]),
            "udp" | "udp4" | "udp6" => Ok(&["udp"]),
            "" | "ip" => Ok(&["tcp", "udp"]),
            other => Err(LookupError::UnknownNetwork(other.to_string())),
        }
    }

    fn find_builtin(protocol: &str, service: &str) -> Option<u16> {
        BUILTIN_SERVICES
            .iter()
            .find(|(proto, name, _)| *proto == protocol && *name == service)
            .map(|(_, _, port)| *port)
    }
}

impl Default for SystemServicePorts {
    fn default() -> Self {
        Self::new()
    }
}

/// Searches services(5) content for `service` (name or alias) on `protocol`.
///
/// Line format: `name port/protocol [aliases...] [# comment]`
fn find_in_services(content: &str, protocol: &str, service: &str) -> Option<u16> {
    for line in content.lines() {
        let line = match line.find('#') {
            Some(idx) => &line[..idx],
            None => line,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            continue;
        }

        let Some((port, proto)) = fields[1].split_once('/') else {
            warn!(line = line.trim(), "Malformed services entry");
            continue;
        };
        if proto != protocol {
            continue;
        }

        let named = fields[0].eq_ignore_ascii_case(service)
            || fields[2..].iter().any(|alias| alias.eq_ignore_ascii_case(service));
        if !named {
            continue;
        }

        match port.parse::<u16>() {
            Ok(port) => return Some(port),
            Err(e) => warn!(error = %e, line = line.trim(), "Invalid port in services entry"),
        }
    }
    None
}

#[async_trait]
impl ServicePortLookup for SystemServicePorts {
    async fn lookup_port(&self, network: &str, service: &str) -> Result<u16, LookupError> {
        // Numeric and empty services need no lookup, so the network is not checked.
        if service.is_empty() {
            return Ok(0);
        }
        if let Ok(port) = service.parse::<u16>() {
            return Ok(port);
        }

        let protocols = Self::protocols(network)?;

        let service_lc = service.to_ascii_lowercase();

        match fs::read_to_string(&self.services_path).await {
            Ok(content) => {
                for protocol in protocols {
                    if let Some(port) = find_in_services(&content, protocol, &service_lc) {
                        debug!(network, service, port, "Service port found in services database");
                        return Ok(port);
                    }
                }
            }
            Err(e) => {
                debug!(
                    error = %e,
                    path = %self.services_path.display(),
                    "Services database unavailable, using built-in table"
                );
            }
        }

        protocols
            .iter()
            .find_map(|protocol| Self::find_builtin(protocol, &service_lc))
            .ok_or_else(|| LookupError::UnknownPort {
                network: network.to_string(),
                service: service.to_string(),
            })
    }
}
