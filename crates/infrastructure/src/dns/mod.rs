pub mod zone_loader;
pub mod zone_resolver;

pub use zone_loader::ZoneLoader;
pub use zone_resolver::{Resolution, ZoneResolver};
