//! Error types for routectl.

use ip6_route_table::RouteError;
use ip6_types::Ipv6Prefix;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for routectl operations.
pub type Result<T> = std::result::Result<T, RoutectlError>;

/// Errors raised while loading a static routes file into a table.
#[derive(Debug, Error)]
pub enum RoutectlError {
    /// The routes file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The routes file is not valid TOML or does not fit the schema.
    #[error("Failed to parse routes file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A route names an interface missing from the `interfaces` list.
    #[error("Route {prefix}: unknown interface '{interface}'")]
    UnknownInterface { prefix: Ipv6Prefix, interface: String },

    /// The table refused a route.
    #[error("Route {prefix}: {source}")]
    Route {
        prefix: Ipv6Prefix,
        #[source]
        source: RouteError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        let prefix: Ipv6Prefix = "2001:db8::/32".parse().unwrap();

        let err = RoutectlError::UnknownInterface {
            prefix,
            interface: "eth9".to_string(),
        };
        assert_eq!(err.to_string(), "Route 2001:db8::/32: unknown interface 'eth9'");

        let err = RoutectlError::Route {
            prefix,
            source: RouteError::TableFull { capacity: 16 },
        };
        assert_eq!(err.to_string(), "Route 2001:db8::/32: Route table full (16 entries)");
    }
}
