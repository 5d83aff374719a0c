mod resolver;
mod service_ports;

pub use resolver::{IpFamily, Resolver};
pub use service_ports::ServicePortLookup;

// Re-export for convenience
pub use mockdns_domain::LookupError;
