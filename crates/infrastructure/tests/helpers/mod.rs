mod builders;
mod port_lookup_mock;

pub use builders::ZoneBuilder;
pub use port_lookup_mock::StaticPortLookup;
