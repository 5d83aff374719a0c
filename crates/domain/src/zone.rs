use crate::errors::ZoneFailure;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct MxRecord {
    pub host: String,
    pub pref: u16,
}

impl MxRecord {
    pub fn new(host: impl Into<String>, pref: u16) -> Self {
        Self {
            host: host.into(),
            pref,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct NsRecord {
    pub host: String,
}

impl NsRecord {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct SrvRecord {
    pub target: String,
    pub port: u16,

    #[serde(default)]
    pub priority: u16,

    #[serde(default)]
    pub weight: u16,
}

impl SrvRecord {
    pub fn new(target: impl Into<String>, port: u16, priority: u16, weight: u16) -> Self {
        Self {
            target: target.into(),
            port,
            priority,
            weight,
        }
    }
}

/// Result of an SRV lookup: the first alias seen at the query name (if any)
/// and the records of the terminal zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SrvLookup {
    pub cname: Option<String>,
    pub records: Vec<SrvRecord>,
}

/// All records served for one exact domain name or reverse-lookup key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Zone {
    /// Returned by any lookup that resolves to this zone.
    pub error: Option<ZoneFailure>,

    /// Authenticated Data flag for server layers; the resolver ignores it.
    #[serde(alias = "ad")]
    pub authenticated_data: bool,

    pub a: Vec<String>,
    pub aaaa: Vec<String>,
    pub txt: Vec<String>,
    pub ptr: Vec<String>,
    pub cname: Option<String>,
    pub mx: Vec<MxRecord>,
    pub ns: Vec<NsRecord>,
    pub srv: Vec<SrvRecord>,
}

impl Zone {
    /// Zone that is only an alias for `target`.
    pub fn alias(target: impl Into<String>) -> Self {
        Self {
            cname: Some(target.into()),
            ..Default::default()
        }
    }

    /// Zone whose every lookup fails with `failure`.
    pub fn failing(failure: ZoneFailure) -> Self {
        Self {
            error: Some(failure),
            ..Default::default()
        }
    }

    /// CNAME target, ignoring an empty value.
    pub fn cname_target(&self) -> Option<&str> {
        self.cname.as_deref().filter(|target| !target.is_empty())
    }

    pub fn is_alias(&self) -> bool {
        self.cname_target().is_some()
    }
}
