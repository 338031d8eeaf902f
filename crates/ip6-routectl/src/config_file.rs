//! Static routes file support.
//!
//! Loads the route configuration from a TOML file:
//!
//! ```toml
//! interfaces = ["eth0", "thread0"]
//!
//! [table]
//! prefix_granularity = 8
//!
//! [[route]]
//! prefix = "2001:db8::/32"
//! interface = "eth0"
//! gateway = "fe80::1"
//! ```
//!
//! Routes are inserted in file order. A later route with the same prefix
//! replaces an earlier one.

use crate::error::{Result, RoutectlError};
use crate::interfaces::InterfaceRegistry;
use crate::RouteTable;
use ip6_route_table::RouteTableConfig;
use ip6_types::{Ipv6Address, Ipv6Prefix};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One `[[route]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRouteConfig {
    /// Destination prefix, e.g. `2001:db8::/32`.
    pub prefix: Ipv6Prefix,

    /// Egress interface name; must appear in `interfaces`.
    pub interface: String,

    /// Next-hop gateway. Omit for directly attached prefixes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<Ipv6Address>,
}

/// Complete static routes file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRoutesFile {
    /// Known interfaces, in handle order
    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Table settings
    #[serde(default)]
    pub table: RouteTableConfig,

    /// Static routes
    #[serde(default, rename = "route")]
    pub routes: Vec<StaticRouteConfig>,
}

impl StaticRoutesFile {
    /// Parses a routes file from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a routes file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RoutectlError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_toml(&content)?;
        debug!(
            "Loaded {} routes over {} interfaces from {}",
            file.routes.len(),
            file.interfaces.len(),
            path.display()
        );
        Ok(file)
    }

    /// Serializes the routes file back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RoutectlError::Configuration(format!("Failed to serialize routes: {}", e)))
    }

    /// Validates table settings and interface names.
    pub fn validate(&self) -> Result<()> {
        self.table
            .validate()
            .map_err(|e| RoutectlError::Configuration(e.to_string()))?;
        InterfaceRegistry::from_names(&self.interfaces)?;
        Ok(())
    }

    /// Builds the interface registry and the route table.
    ///
    /// # Errors
    ///
    /// Fails on the first route with an unknown interface or one the table
    /// refuses (bad prefix length, table full).
    pub fn build(&self) -> Result<(InterfaceRegistry, RouteTable)> {
        self.validate()?;
        let registry = InterfaceRegistry::from_names(&self.interfaces)?;
        let mut table = RouteTable::with_config(self.table);

        for route in &self.routes {
            let interface =
                registry
                    .id(&route.interface)
                    .ok_or_else(|| RoutectlError::UnknownInterface {
                        prefix: route.prefix,
                        interface: route.interface.clone(),
                    })?;

            table
                .insert(route.prefix, interface, route.gateway)
                .map_err(|source| RoutectlError::Route {
                    prefix: route.prefix,
                    source,
                })?;
        }

        info!(
            "Route table ready: {} of {} slots used",
            table.len(),
            table.capacity()
        );
        Ok((registry, table))
    }
}
