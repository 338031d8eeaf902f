//! Route entry stored in a table slot.

use ip6_types::{Ipv6Address, Ipv6Prefix};
use serde::Serialize;

/// One slot of the static route table.
///
/// A slot is empty when it has no interface. Empty slots always hold the
/// zero prefix and no gateway, so nothing stale survives a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry<I> {
    prefix: Ipv6Prefix,
    interface: Option<I>,
    gateway: Option<Ipv6Address>,
}

impl<I> RouteEntry<I> {
    /// An unused slot.
    pub const EMPTY: Self = RouteEntry {
        prefix: Ipv6Prefix::UNSPECIFIED,
        interface: None,
        gateway: None,
    };

    pub(crate) const fn new(prefix: Ipv6Prefix, interface: I, gateway: Option<Ipv6Address>) -> Self {
        Self {
            prefix,
            interface: Some(interface),
            gateway,
        }
    }

    /// Destination prefix of the route.
    pub const fn prefix(&self) -> &Ipv6Prefix {
        &self.prefix
    }

    /// Egress interface, `None` for an empty slot.
    pub const fn interface(&self) -> Option<&I> {
        self.interface.as_ref()
    }

    /// Next-hop gateway. `None` means the destination is delivered directly.
    pub const fn gateway(&self) -> Option<&Ipv6Address> {
        self.gateway.as_ref()
    }

    pub const fn is_empty(&self) -> bool {
        self.interface.is_none()
    }
}

impl<I> Default for RouteEntry<I> {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_entry() {
        let entry: RouteEntry<u8> = RouteEntry::default();
        assert!(entry.is_empty());
        assert_eq!(entry.prefix(), &Ipv6Prefix::UNSPECIFIED);
        assert!(entry.gateway().is_none());
    }

    #[test]
    fn test_serialize() {
        let gateway: Ipv6Address = "fe80::1".parse().unwrap();
        let entry = RouteEntry::new("2001:db8::/32".parse().unwrap(), 3u8, Some(gateway));
        assert!(!entry.is_empty());
        assert_eq!(entry.interface(), Some(&3));

        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "prefix": "2001:db8::/32",
                "interface": 3,
                "gateway": "fe80::1",
            })
        );
    }
}
