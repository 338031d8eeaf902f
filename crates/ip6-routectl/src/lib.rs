//! Static route configuration and diagnostics for the IPv6 route table.
//!
//! This crate is the configuration path of the route table: it reads a
//! TOML routes file, maps interface names to compact handles, inserts the
//! routes into a [`RouteTable`] and renders the result for operators.
//!
//! - [`StaticRoutesFile`]: the routes file schema and loader
//! - [`InterfaceRegistry`]: interface name <-> [`InterfaceId`] mapping
//! - [`report`]: table dumps and lookup reports (text or JSON)

mod config_file;
mod error;
mod interfaces;
pub mod report;

pub use config_file::{StaticRouteConfig, StaticRoutesFile};
pub use error::{Result, RoutectlError};
pub use interfaces::{InterfaceId, InterfaceRegistry};

use ip6_route_table::StaticRouteTable;

/// Number of slots in the route table built from a routes file.
pub const ROUTE_TABLE_SIZE: usize = 16;

/// The route table managed by routectl.
pub type RouteTable = StaticRouteTable<InterfaceId, ROUTE_TABLE_SIZE>;
