use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_CNAME_HOPS: usize = 8;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Report a zone's own CNAME but do not follow it in record lookups.
    #[serde(default)]
    pub skip_cname: bool,

    /// Maximum number of CNAME links followed before giving up.
    #[serde(default = "default_max_cname_hops")]
    pub max_cname_hops: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            skip_cname: false,
            max_cname_hops: default_max_cname_hops(),
        }
    }
}

fn default_max_cname_hops() -> usize {
    DEFAULT_MAX_CNAME_HOPS
}
