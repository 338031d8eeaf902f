//! IPv6 value types shared by the static route table and its tooling.
//!
//! - [`Ipv6Address`]: a 128-bit IPv6 address
//! - [`Ipv6Prefix`]: an address plus a prefix length in bits (CIDR notation)
//!
//! Prefix matching is byte granular: only the first `prefix_len / 8` bytes
//! take part in a comparison. See [`Ipv6Prefix::matches`].

mod ip;

pub use ip::{Ipv6Address, Ipv6Prefix, IPV6_MAX_PREFIX_LEN};

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid IPv6 address format: {0}")]
    InvalidIpAddress(String),

    #[error("invalid IPv6 prefix format: {0}")]
    InvalidIpPrefix(String),
}
