//! # RHTMX State
//!
//! Vocabulary shared by the proxy-based reactive state runtime:
//! - [`ProxyFlags`]: per-proxy behavior bits (deep tracking, immutability)
//! - [`ProxyKey`]: unforgeable keys for attaching metadata to a proxy
//!   without colliding with user-visible properties
//!
//! ## Example
//!
//! ```
//! use rhtmx_state::{ProxyFlags, PROXY_FLAGS, PROXY_TARGET};
//!
//! let flags = ProxyFlags::RECURSIVE | ProxyFlags::IMMUTABLE;
//! assert_eq!(flags.bits(), 0b11);
//! assert!(flags.contains(ProxyFlags::IMMUTABLE));
//!
//! assert_ne!(*PROXY_TARGET, *PROXY_FLAGS);
//! ```

pub mod flags;
pub mod key;

pub use flags::ProxyFlags;
pub use key::{
    immutable_prop_name, strip_immutable_prefix, ProxyKey, IMMUTABLE, IMMUTABLE_PREFIX,
    PROXY_FLAGS, PROXY_MANAGER, PROXY_TARGET,
};
