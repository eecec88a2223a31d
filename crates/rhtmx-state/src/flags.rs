// File: src/flags.rs
// Purpose: Behavior bits attached to a reactive proxy

bitflags::bitflags! {
    /// Flags stored alongside a proxied state object.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ProxyFlags: u8 {
        /// Nested objects are wrapped in proxies as they are read.
        const RECURSIVE = 1 << 0;
        /// Writes through the proxy are rejected.
        const IMMUTABLE = 1 << 1;
    }
}

impl ProxyFlags {
    pub const fn is_recursive(self) -> bool {
        self.contains(Self::RECURSIVE)
    }

    pub const fn is_immutable(self) -> bool {
        self.contains(Self::IMMUTABLE)
    }
}
