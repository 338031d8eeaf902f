//! Human and JSON renderings of the route table and of lookups.

use crate::interfaces::InterfaceRegistry;
use crate::RouteTable;
use ip6_types::{Ipv6Address, Ipv6Prefix};
use serde::Serialize;
use std::fmt::{self, Write};

/// One installed route, with its interface resolved to a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteView {
    pub slot: usize,
    pub prefix: Ipv6Prefix,
    pub interface: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<Ipv6Address>,
}

/// Lists the installed routes in table order.
pub fn route_views(table: &RouteTable, registry: &InterfaceRegistry) -> Vec<RouteView> {
    table
        .iter()
        .enumerate()
        .map(|(slot, entry)| RouteView {
            slot,
            prefix: *entry.prefix(),
            interface: entry
                .interface()
                .map(|id| registry.display_name(*id))
                .unwrap_or_default(),
            gateway: entry.gateway().copied(),
        })
        .collect()
}

/// Renders the table as aligned text, one route per line.
pub fn render_table(table: &RouteTable, registry: &InterfaceRegistry) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "IPv6 static routes ({}/{} slots used)",
        table.len(),
        table.capacity()
    );
    for view in route_views(table, registry) {
        let _ = writeln!(out, "{}", view);
    }
    out
}

impl fmt::Display for RouteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.prefix.to_string();
        write!(f, "{:>3}  {:<43}  dev {}", self.slot, prefix, self.interface)?;
        if let Some(gateway) = self.gateway {
            write!(f, "  via {}", gateway)?;
        }
        Ok(())
    }
}

/// Outcome of resolving one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupReport {
    pub destination: Ipv6Address,
    /// The selected route, absent when nothing matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteView>,
}

impl LookupReport {
    /// Resolves `dest` the way the forwarding path does: interface first,
    /// then the gateway for that interface.
    pub fn resolve(
        table: &RouteTable,
        registry: &InterfaceRegistry,
        src: Option<&Ipv6Address>,
        dest: &Ipv6Address,
    ) -> Self {
        let route = table.find_route_index(dest).and_then(|slot| {
            let interface = table.resolve_interface(src, dest)?;
            let entry = table.get(slot)?;
            Some(RouteView {
                slot,
                prefix: *entry.prefix(),
                interface: registry.display_name(interface),
                gateway: table.resolve_gateway(&interface, dest),
            })
        });

        LookupReport {
            destination: *dest,
            route,
        }
    }

    pub fn is_routed(&self) -> bool {
        self.route.is_some()
    }
}

impl fmt::Display for LookupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.route {
            Some(route) => {
                write!(f, "{}", self.destination)?;
                if let Some(gateway) = route.gateway {
                    write!(f, " via {}", gateway)?;
                }
                write!(
                    f,
                    " dev {} (route {}, slot {})",
                    route.interface, route.prefix, route.slot
                )
            }
            None => write!(f, "{}: no route", self.destination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::InterfaceId;
    use pretty_assertions::assert_eq;

    fn addr(s: &str) -> Ipv6Address {
        s.parse().unwrap()
    }

    fn sample() -> (InterfaceRegistry, RouteTable) {
        let registry = InterfaceRegistry::from_names(&["eth0", "thread0"]).unwrap();
        let mut table = RouteTable::new();
        table
            .insert("2001:db8::/32".parse().unwrap(), InterfaceId::new(0), None)
            .unwrap();
        table
            .insert(
                "2001:db8:1::/48".parse().unwrap(),
                InterfaceId::new(1),
                Some(addr("fe80::1")),
            )
            .unwrap();
        (registry, table)
    }

    #[test]
    fn test_route_views() {
        let (registry, table) = sample();
        let views = route_views(&table, &registry);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].interface, "thread0");
        assert_eq!(views[0].gateway, Some(addr("fe80::1")));
        assert_eq!(views[1].slot, 1);
        assert_eq!(views[1].interface, "eth0");
    }

    #[test]
    fn test_render_table() {
        let (registry, table) = sample();
        let text = render_table(&table, &registry);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("IPv6 static routes (2/"));
        assert!(lines[1].contains("dev thread0  via fe80::1"));
        assert!(lines[2].ends_with("dev eth0"));
    }

    #[test]
    fn test_lookup_report() {
        let (registry, table) = sample();

        let report = LookupReport::resolve(&table, &registry, None, &addr("2001:db8:1::9"));
        assert!(report.is_routed());
        assert_eq!(
            report.to_string(),
            "2001:db8:1::9 via fe80::1 dev thread0 (route 2001:db8:1::/48, slot 0)"
        );

        let report = LookupReport::resolve(&table, &registry, None, &addr("2001:db8:2::9"));
        assert_eq!(
            report.to_string(),
            "2001:db8:2::9 dev eth0 (route 2001:db8::/32, slot 1)"
        );

        let report = LookupReport::resolve(&table, &registry, None, &addr("fd00::1"));
        assert!(!report.is_routed());
        assert_eq!(report.to_string(), "fd00::1: no route");
    }

    #[test]
    fn test_lookup_report_json() {
        let (registry, table) = sample();
        let report = LookupReport::resolve(&table, &registry, None, &addr("2001:db8:2::9"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "destination": "2001:db8:2::9",
                "route": {
                    "slot": 1,
                    "prefix": "2001:db8::/32",
                    "interface": "eth0",
                },
            })
        );
    }
}
