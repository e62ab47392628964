// Environment lookup helpers.
//
// A variable that is set but empty counts as unset, so `TEMPORAL_ADDRESS=` in a
// `.env` file falls back to the default instead of dialing an empty address.

use std::env;

/// Normalize a raw value: `None` when missing or empty.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Read `key` from the process environment.
pub fn lookup(key: &str) -> Option<String> {
    non_empty(env::var(key).ok())
}

/// Read `key` from the process environment or fall back to `default`.
pub fn env_or(key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}
