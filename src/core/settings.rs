// Connection settings for the workflow service.
//
// Purpose
// - Resolve the address and namespace used for a single connection attempt.
//
// Rules
// - Address comes from TEMPORAL_ADDRESS, or DEFAULT_HOST_PORT when unset or empty.
//   Any other value, whitespace included, is used as given.
// - Namespace is the caller's value, or DEFAULT_NAMESPACE when none is given.

use crate::shared::env;

pub const TEMPORAL_ADDRESS_ENV: &str = "TEMPORAL_ADDRESS";
pub const DEFAULT_HOST_PORT: &str = "localhost:7233";
pub const DEFAULT_NAMESPACE: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub address: String,
    pub namespace: String,
}

impl ConnectionSettings {
    pub fn new(address: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            namespace: namespace.into(),
        }
    }

    /// Resolve settings using `lookup` to read configuration keys.
    pub fn resolve<L>(lookup: L, namespace: Option<&str>) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        let address = env::non_empty(lookup(TEMPORAL_ADDRESS_ENV))
            .unwrap_or_else(|| DEFAULT_HOST_PORT.to_string());
        let namespace = namespace.unwrap_or(DEFAULT_NAMESPACE);
        Self::new(address, namespace)
    }

    /// Resolve settings from the process environment.
    pub fn from_env(namespace: Option<&str>) -> Self {
        Self::new(
            env::env_or(TEMPORAL_ADDRESS_ENV, DEFAULT_HOST_PORT),
            namespace.unwrap_or(DEFAULT_NAMESPACE),
        )
    }
}
