// File: src/key.rs
// Purpose: Unforgeable metadata keys for reactive proxies

use once_cell::sync::Lazy;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_KEY_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque key identifying a slot of proxy metadata
///
/// Every call to [`ProxyKey::new`] yields a key that is unequal to every
/// other key in the process, even one with the same description. Equality
/// and hashing only look at the issued id.
#[derive(Clone, Copy)]
pub struct ProxyKey {
    id: u64,
    description: &'static str,
}

impl ProxyKey {
    pub fn new(description: &'static str) -> Self {
        Self {
            id: NEXT_KEY_ID.fetch_add(1, Ordering::Relaxed),
            description,
        }
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl PartialEq for ProxyKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ProxyKey {}

impl Hash for ProxyKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ProxyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProxyKey({}#{})", self.description, self.id)
    }
}

impl fmt::Display for ProxyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProxyKey({})", self.description)
    }
}

/// The raw object behind a proxy
pub static PROXY_TARGET: Lazy<ProxyKey> = Lazy::new(|| ProxyKey::new("proxy target"));

/// The proxy's [`ProxyFlags`](crate::ProxyFlags)
pub static PROXY_FLAGS: Lazy<ProxyKey> = Lazy::new(|| ProxyKey::new("proxy flags"));

/// The subscription manager owning the proxy
pub static PROXY_MANAGER: Lazy<ProxyKey> = Lazy::new(|| ProxyKey::new("proxy manager"));

/// Marks a value that must never be wrapped
pub static IMMUTABLE: Lazy<ProxyKey> = Lazy::new(|| ProxyKey::new("IMMUTABLE"));

/// Prefix of property names whose value is immutable
pub const IMMUTABLE_PREFIX: &str = "$$";

/// `name` → `$$name`
pub fn immutable_prop_name(name: &str) -> String {
    format!("{}{}", IMMUTABLE_PREFIX, name)
}

/// `$$name` → `Some("name")`, anything else → `None`
pub fn strip_immutable_prefix(name: &str) -> Option<&str> {
    name.strip_prefix(IMMUTABLE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_well_known_keys_are_distinct() {
        let keys = [*PROXY_TARGET, *PROXY_FLAGS, *PROXY_MANAGER, *IMMUTABLE];
        let unique: HashSet<ProxyKey> = keys.iter().copied().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn test_well_known_keys_are_stable() {
        let first = *PROXY_TARGET;
        let second = *PROXY_TARGET;
        assert_eq!(first, second);
        assert_eq!(first.description(), "proxy target");
    }

    #[test]
    fn test_equality_is_identity_not_description() {
        let a = ProxyKey::new("proxy target");
        let b = ProxyKey::new("proxy target");
        assert_ne!(a, b);
        assert_ne!(a, *PROXY_TARGET);
        assert_eq!(a, a);
    }

    #[test]
    fn test_display() {
        assert_eq!(PROXY_FLAGS.to_string(), "ProxyKey(proxy flags)");
    }

    #[test]
    fn test_immutable_prefix() {
        assert_eq!(immutable_prop_name("count"), "$$count");
        assert_eq!(strip_immutable_prefix("$$count"), Some("count"));
        assert_eq!(strip_immutable_prefix("count"), None);
    }
}
