use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Identity of the authenticated operator for one validation call.
///
/// Built by the session layer from its authentication source and passed in
/// as an immutable snapshot; the validator never mutates it, so concurrent
/// invocations can share nothing and still agree on ownership decisions.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorSession {
    /// Network code the operator is authorized to submit for
    pub network_code: String,

    /// Registered start instant of the authorized network epoch
    pub network_start: DateTime<Utc>,

    /// Registered end instant, open when absent
    pub network_end: Option<DateTime<Utc>>,

    /// Administrators bypass the network ownership check entirely
    pub administrator: bool,
}

impl OperatorSession {
    /// Create a session for an operator of the given network
    pub fn new<S: Into<String>>(network_code: S, network_start: DateTime<Utc>) -> Self {
        Self {
            network_code: network_code.into(),
            network_start,
            network_end: None,
            administrator: false,
        }
    }

    /// Set the registered epoch end
    pub fn with_end(mut self, network_end: DateTime<Utc>) -> Self {
        self.network_end = Some(network_end);
        self
    }

    /// Mark the session as an administrator session
    pub fn administrator(mut self) -> Self {
        self.administrator = true;
        self
    }

    /// True when the given document network code is owned by this session.
    /// Comparison is case-insensitive over the trimmed codes; administrator
    /// sessions own every network.
    pub fn owns_network(&self, code: &str) -> bool {
        if self.administrator {
            return true;
        }
        code.trim().eq_ignore_ascii_case(self.network_code.trim())
    }
}

/// Read-only snapshot of the station codes already known to the registry,
/// used to flag which validated stations are new.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationRegistry {
    known: HashSet<String>,
}

impl StationRegistry {
    /// Create an empty registry snapshot (every station reads as new)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from an iterator of known station codes
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: codes
                .into_iter()
                .map(|code| code.into().to_ascii_uppercase())
                .collect(),
        }
    }

    /// Add one known station code
    pub fn with_station<S: Into<String>>(mut self, code: S) -> Self {
        self.known.insert(code.into().to_ascii_uppercase());
        self
    }

    /// True when the station code is already registered
    pub fn is_known(&self, code: &str) -> bool {
        self.known.contains(&code.to_ascii_uppercase())
    }

    /// Number of known stations in the snapshot
    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// True when the snapshot holds no stations
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}
