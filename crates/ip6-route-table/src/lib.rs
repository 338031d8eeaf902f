//! Fixed-capacity IPv6 static route table.
//!
//! This crate selects, for a destination address, the egress interface and
//! optional next-hop gateway of the longest matching static route:
//!
//! - [`StaticRouteTable`]: `N` slots sorted by descending prefix length
//! - [`RouteEntry`]: one slot (prefix, interface handle, gateway)
//! - [`RouteTableConfig`]: prefix validity rules applied on insert
//! - [`RouteError`]: insert failures
//!
//! # Architecture
//!
//! The forwarding path calls the lookup side
//! ([`find_route_index`](StaticRouteTable::find_route_index),
//! [`resolve_interface`](StaticRouteTable::resolve_interface),
//! [`resolve_gateway`](StaticRouteTable::resolve_gateway)); the
//! configuration path calls [`insert`](StaticRouteTable::insert) and
//! [`remove`](StaticRouteTable::remove). All operations are synchronous and
//! never allocate. The table is an ordinary owned value: callers that share
//! it between execution contexts guard it with their own lock.
//!
//! Prefixes match on whole bytes only. A route whose length is not a
//! multiple of 8 matches like its length rounded down to the previous byte.
//! The default configuration only accepts byte-aligned lengths.

mod config;
mod entry;
mod error;
mod table;

pub use config::{RouteTableConfig, DEFAULT_PREFIX_GRANULARITY};
pub use entry::RouteEntry;
pub use error::{Result, RouteError};
pub use table::StaticRouteTable;

pub use ip6_types::{Ipv6Address, Ipv6Prefix};
