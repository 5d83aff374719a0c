use mockdns_domain::LookupError;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// Reverse-DNS query names (`in-addr.arpa.` / `ip6.arpa.`) for addresses.
pub struct ReverseName;

impl ReverseName {
    /// Parses `addr` and returns its fully-qualified reverse lookup key.
    pub fn from_address(addr: &str) -> Result<String, LookupError> {
        let ip = IpAddr::from_str(addr)
            .map_err(|_| LookupError::MalformedAddress(addr.to_string()))?;
        Ok(Self::ip_to_reverse_domain(&ip))
    }

    /// IPv4-mapped IPv6 addresses use the IPv4 form.
    pub fn ip_to_reverse_domain(ip: &IpAddr) -> String {
        match ip {
            IpAddr::V4(ipv4) => Self::ipv4_reverse_domain(ipv4),
            IpAddr::V6(ipv6) => {
                if let Some(ipv4) = ipv6.to_ipv4_mapped() {
                    return Self::ipv4_reverse_domain(&ipv4);
                }

                let mut nibbles = Vec::with_capacity(32);
                for byte in ipv6.octets().iter().rev() {
                    nibbles.push(format!("{:x}", byte & 0x0f));
                    nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
                }
                format!("{}.ip6.arpa.", nibbles.join("."))
            }
        }
    }

    fn ipv4_reverse_domain(ipv4: &Ipv4Addr) -> String {
        let octets = ipv4.octets();
        format!(
            "{}.{}.{}.{}.in-addr.arpa.",
            octets[3], octets[2], octets[1], octets[0]
        )
    }
}
