use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure stored on a zone record. Any lookup that lands on the record
/// returns it unchanged.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[error("{message}")]
pub struct ZoneFailure {
    pub message: String,

    #[serde(default)]
    pub not_found: bool,

    #[serde(default)]
    pub timeout: bool,

    #[serde(default)]
    pub temporary: bool,
}

impl ZoneFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// SERVFAIL-style failure, reported as temporary.
    pub fn servfail() -> Self {
        Self {
            message: "server misbehaving".to_string(),
            temporary: true,
            ..Default::default()
        }
    }

    pub fn not_found() -> Self {
        Self {
            message: "no such host".to_string(),
            not_found: true,
            ..Default::default()
        }
    }

    pub fn timeout() -> Self {
        Self {
            message: "i/o timeout".to_string(),
            timeout: true,
            temporary: true,
            ..Default::default()
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("lookup {0}: no such host")]
    NotFound(String),

    #[error(transparent)]
    Zone(#[from] ZoneFailure),

    #[error("unrecognized address: {0}")]
    MalformedAddress(String),

    #[error("malformed IP in records: {0}")]
    MalformedRecord(String),

    #[error("lookup {name}: CNAME chain exceeds {limit} hops")]
    AliasChainTooLong { name: String, limit: usize },

    #[error("unknown port {network}/{service}")]
    UnknownPort { network: String, service: String },

    #[error("unknown network {0}")]
    UnknownNetwork(String),
}

impl LookupError {
    pub fn not_found(name: impl Into<String>) -> Self {
        LookupError::NotFound(name.into())
    }

    /// True when the queried host does not exist, either because it is
    /// missing from the table or because its zone stores a not-found failure.
    pub fn is_not_found(&self) -> bool {
        match self {
            LookupError::NotFound(_) => true,
            LookupError::Zone(failure) => failure.not_found,
            _ => false,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, LookupError::Zone(failure) if failure.timeout)
    }

    pub fn is_temporary(&self) -> bool {
        matches!(self, LookupError::Zone(failure) if failure.temporary || failure.timeout)
    }

    /// The name the failing lookup was about, when the error carries one.
    ///
    /// Stored zone failures, malformed stored records and unknown networks
    /// carry no name and return `None`.
    pub fn name(&self) -> Option<&str> {
        match self {
            LookupError::NotFound(name) | LookupError::AliasChainTooLong { name, .. } => {
                Some(name.as_str())
            }
            LookupError::MalformedAddress(addr) => Some(addr.as_str()),
            LookupError::UnknownPort { service, .. } => Some(service.as_str()),
            LookupError::Zone(_)
            | LookupError::MalformedRecord(_)
            | LookupError::UnknownNetwork(_) => None,
        }
    }
}
