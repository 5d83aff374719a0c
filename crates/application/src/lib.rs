//! mockdns application layer: resolver ports and lookup use cases
pub mod ports;
pub mod use_cases;
