//! mockdns domain layer
pub mod config;
pub mod errors;
pub mod name;
pub mod zone;
pub mod zone_table;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use errors::{LookupError, ZoneFailure};
pub use name::normalize_name;
pub use zone::{MxRecord, NsRecord, SrvLookup, SrvRecord, Zone};
pub use zone_table::{ZoneTable, ZoneTableBuilder};
