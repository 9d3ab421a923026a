//! Data models exchanged with kubectl

use std::fmt;

/// Local/remote port pair entered by the operator.
///
/// Both sides are kept as the literal text the operator typed; validation
/// happens at prompt time, never afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSpec {
    pub local: String,
    pub remote: String,
}

impl PortSpec {
    pub fn new(local: impl Into<String>, remote: impl Into<String>) -> Self {
        Self {
            local: local.into(),
            remote: remote.into(),
        }
    }

    /// The `<local>:<remote>` argument passed to `port-forward`
    pub fn forward_arg(&self) -> String {
        format!("{}:{}", self.local, self.remote)
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.local, self.remote)
    }
}

/// Outcome of a list-producing command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// At least one name, in the order kubectl printed them
    Found(Vec<String>),
    /// Command produced nothing usable
    NoneAvailable,
}

impl Discovery {
    /// Build from parsed tokens, collapsing an empty list into `NoneAvailable`
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            Discovery::NoneAvailable
        } else {
            Discovery::Found(names)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Discovery::NoneAvailable)
    }
}
