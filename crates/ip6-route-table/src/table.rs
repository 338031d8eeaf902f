//! Static route table storage and longest-prefix-match lookup.
//!
//! Routes live in a fixed array of `N` slots. Occupied slots always come
//! first and are kept sorted by descending prefix length, so the first
//! matching slot in a front-to-back scan is the longest match.
//!
//! Insertion opens a gap by shifting shorter routes one slot toward the end;
//! removal closes the gap by shifting the tail back and clearing what is
//! left behind. Both are O(N) copies with no allocation.

use log::{debug, info, warn};
use std::fmt;

use ip6_types::{Ipv6Address, Ipv6Prefix};

use crate::config::RouteTableConfig;
use crate::entry::RouteEntry;
use crate::error::{Result, RouteError};

/// A fixed-capacity IPv6 static route table.
///
/// `I` is the embedder's network interface handle. The table never
/// interprets it beyond copying it around and handing it back on lookup.
///
/// # Example
///
/// ```
/// use ip6_route_table::StaticRouteTable;
///
/// let mut table: StaticRouteTable<&str, 8> = StaticRouteTable::new();
/// table.insert("2001:db8::/32".parse().unwrap(), "if0", None).unwrap();
/// table.insert("2001:db8:1::/48".parse().unwrap(), "if1", None).unwrap();
///
/// let dest = "2001:db8:1::1".parse().unwrap();
/// assert_eq!(table.resolve_interface(None, &dest), Some("if1"));
/// ```
#[derive(Debug, Clone)]
pub struct StaticRouteTable<I, const N: usize> {
    config: RouteTableConfig,
    /// Number of occupied slots; `entries[..len]` are in use.
    len: usize,
    entries: [RouteEntry<I>; N],
}

impl<I: Copy + fmt::Debug, const N: usize> StaticRouteTable<I, N> {
    /// Creates an empty table with the default configuration.
    pub const fn new() -> Self {
        Self::with_config(RouteTableConfig::DEFAULT)
    }

    /// Creates an empty table.
    ///
    /// The configuration is not validated here; an invalid prefix
    /// granularity simply rejects every insert. Call
    /// [`RouteTableConfig::validate`] first to get a descriptive error.
    pub const fn with_config(config: RouteTableConfig) -> Self {
        Self {
            config,
            len: 0,
            entries: [RouteEntry::EMPTY; N],
        }
    }

    pub const fn config(&self) -> &RouteTableConfig {
        &self.config
    }

    /// Number of slots in the table.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of installed routes.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Adds a route, or replaces the route with the same prefix.
    ///
    /// Returns the slot the route ended up in.
    ///
    /// # Errors
    ///
    /// - [`RouteError::InvalidArgument`] if the prefix length is not accepted
    ///   by the table configuration.
    /// - [`RouteError::TableFull`] if no slot is free and no existing route
    ///   has the same prefix.
    pub fn insert(
        &mut self,
        prefix: Ipv6Prefix,
        interface: I,
        gateway: Option<Ipv6Address>,
    ) -> Result<usize> {
        self.insert_entry(prefix, Some(interface), gateway)
    }

    /// Same as [`insert`](Self::insert) for callers holding an optional
    /// interface handle; a missing interface is an invalid argument.
    pub fn insert_entry(
        &mut self,
        prefix: Ipv6Prefix,
        interface: Option<I>,
        gateway: Option<Ipv6Address>,
    ) -> Result<usize> {
        if !self.config.prefix_is_valid(prefix.prefix_len()) {
            return Err(RouteError::InvalidArgument(format!(
                "prefix length {} of {} not accepted (granularity {})",
                prefix.prefix_len(),
                prefix,
                self.config.prefix_granularity
            )));
        }
        let interface = interface.ok_or_else(|| {
            RouteError::InvalidArgument(format!("no interface given for {}", prefix))
        })?;

        if let Some(gw) = gateway {
            if !gw.is_link_local() {
                warn!("Route {}: gateway {} is not link-local", prefix, gw);
            }
        }

        let entry = RouteEntry::new(prefix, interface, gateway);

        if let Some(index) = self.position(&prefix) {
            self.entries[index] = entry;
            debug!("Replaced route {} -> {:?} in slot {}", prefix, interface, index);
            return Ok(index);
        }

        if self.is_full() {
            warn!("Cannot add route {}: table full ({} entries)", prefix, N);
            return Err(RouteError::TableFull { capacity: N });
        }

        // Walk back from the first free slot, moving strictly shorter
        // prefixes down. Equal lengths stay ahead of the new entry.
        let mut index = self.len;
        while index > 0 && prefix.prefix_len() > self.entries[index - 1].prefix().prefix_len() {
            self.entries[index] = self.entries[index - 1];
            index -= 1;
        }

        self.entries[index] = entry;
        self.len += 1;

        info!("Added route {} -> {:?} in slot {}", prefix, interface, index);
        Ok(index)
    }

    /// Removes the route with the given prefix.
    ///
    /// Absent prefixes are ignored. The removed entry is handed back for
    /// callers that want to log or inspect it.
    pub fn remove(&mut self, prefix: &Ipv6Prefix) -> Option<RouteEntry<I>> {
        let pos = self.position(prefix)?;
        let removed = self.entries[pos];

        self.entries.copy_within(pos + 1..self.len, pos);
        self.len -= 1;
        for slot in &mut self.entries[self.len..] {
            *slot = RouteEntry::EMPTY;
        }

        info!("Removed route {} from slot {}", removed.prefix(), pos);
        Some(removed)
    }

    /// Returns the slot of the longest prefix covering `dest`.
    pub fn find_route_index(&self, dest: &Ipv6Address) -> Option<usize> {
        self.iter().position(|entry| entry.prefix().matches(dest))
    }

    /// Returns the route selected for `dest`.
    pub fn lookup(&self, dest: &Ipv6Address) -> Option<&RouteEntry<I>> {
        self.find_route_index(dest).map(|index| &self.entries[index])
    }

    /// Returns the egress interface for `dest`.
    ///
    /// `src` is accepted so this can stand in for source-aware routing hooks;
    /// it does not influence the result.
    pub fn resolve_interface(&self, _src: Option<&Ipv6Address>, dest: &Ipv6Address) -> Option<I> {
        self.lookup(dest).and_then(|entry| entry.interface().copied())
    }

    /// Returns the gateway to forward `dest` through, or `None` for direct
    /// delivery or when no route exists.
    ///
    /// The route is picked by prefix alone; `interface` is not used to
    /// filter it.
    pub fn resolve_gateway(&self, _interface: &I, dest: &Ipv6Address) -> Option<Ipv6Address> {
        self.lookup(dest).and_then(|entry| entry.gateway().copied())
    }

    /// Raw view of every slot, empty ones included. Meant for diagnostics.
    pub const fn entries(&self) -> &[RouteEntry<I>; N] {
        &self.entries
    }

    /// Returns the entry in `index`, if that slot is occupied.
    pub fn get(&self, index: usize) -> Option<&RouteEntry<I>> {
        self.routes().get(index)
    }

    /// The occupied slots, longest prefix first.
    pub fn routes(&self) -> &[RouteEntry<I>] {
        &self.entries[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteEntry<I>> {
        self.routes().iter()
    }

    fn position(&self, prefix: &Ipv6Prefix) -> Option<usize> {
        self.iter().position(|entry| entry.prefix().same_key(prefix))
    }
}

impl<I: Copy + fmt::Debug, const N: usize> Default for StaticRouteTable<I, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, I: Copy + fmt::Debug, const N: usize> IntoIterator for &'a StaticRouteTable<I, N> {
    type Item = &'a RouteEntry<I>;
    type IntoIter = std::slice::Iter<'a, RouteEntry<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<I: Copy + fmt::Debug + fmt::Display, const N: usize> fmt::Display for StaticRouteTable<I, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IPv6 static routes ({}/{} slots used)", self.len, N)?;
        for (index, entry) in self.iter().enumerate() {
            let prefix = entry.prefix().to_string();
            write!(f, "{:>3}  {:<43}", index, prefix)?;
            if let Some(interface) = entry.interface() {
                write!(f, "  dev {}", interface)?;
            }
            if let Some(gateway) = entry.gateway() {
                write!(f, "  via {}", gateway)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
