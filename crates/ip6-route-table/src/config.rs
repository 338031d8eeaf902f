//! Route table configuration.
//!
//! The table capacity is a const generic and cannot be configured here.
//! What can be configured is the prefix validity rule applied on insert.

use crate::error::{Result, RouteError};
use ip6_types::IPV6_MAX_PREFIX_LEN;
use serde::{Deserialize, Serialize};

/// Default granularity: prefix lengths must sit on a byte boundary.
pub const DEFAULT_PREFIX_GRANULARITY: u8 = 8;

/// Configuration for a [`StaticRouteTable`](crate::StaticRouteTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTableConfig {
    /// Accepted prefix lengths are the multiples of this value up to 128.
    ///
    /// With the default of 8 every accepted route is matched exactly. A
    /// smaller granularity admits lengths that are not byte aligned; those
    /// are matched on their whole bytes only.
    #[serde(default = "default_prefix_granularity")]
    pub prefix_granularity: u8,
}

fn default_prefix_granularity() -> u8 {
    DEFAULT_PREFIX_GRANULARITY
}

impl RouteTableConfig {
    pub const DEFAULT: Self = RouteTableConfig {
        prefix_granularity: DEFAULT_PREFIX_GRANULARITY,
    };

    /// Creates a configuration with the given prefix granularity.
    pub const fn with_prefix_granularity(prefix_granularity: u8) -> Self {
        Self { prefix_granularity }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let granularity = self.prefix_granularity;
        if granularity == 0 || IPV6_MAX_PREFIX_LEN % granularity != 0 {
            return Err(RouteError::InvalidConfig {
                field: "prefix_granularity".to_string(),
                message: format!("{} does not divide {}", granularity, IPV6_MAX_PREFIX_LEN),
            });
        }
        Ok(())
    }

    /// Returns true if a route of `prefix_len` bits may be inserted.
    pub fn prefix_is_valid(&self, prefix_len: u8) -> bool {
        self.prefix_granularity != 0
            && prefix_len <= IPV6_MAX_PREFIX_LEN
            && prefix_len % self.prefix_granularity == 0
    }
}

impl Default for RouteTableConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_accepts_byte_aligned_lengths() {
        let config = RouteTableConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.prefix_is_valid(0));
        assert!(config.prefix_is_valid(48));
        assert!(config.prefix_is_valid(128));
        assert!(!config.prefix_is_valid(36));
        assert!(!config.prefix_is_valid(129));
        assert!(!config.prefix_is_valid(136));
    }

    #[test]
    fn test_bit_granularity() {
        let config = RouteTableConfig::with_prefix_granularity(1);
        assert!(config.validate().is_ok());
        assert!(config.prefix_is_valid(36));
        assert!(!config.prefix_is_valid(129));
    }

    #[test]
    fn test_invalid_granularity() {
        assert!(RouteTableConfig::with_prefix_granularity(0).validate().is_err());
        assert!(RouteTableConfig::with_prefix_granularity(3).validate().is_err());
        assert!(!RouteTableConfig::with_prefix_granularity(0).prefix_is_valid(0));
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: RouteTableConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RouteTableConfig::default());

        let config: RouteTableConfig =
            serde_json::from_str(r#"{"prefix_granularity": 4}"#).unwrap();
        assert_eq!(config.prefix_granularity, 4);
    }
}
