//! IPv6 address and prefix types with safe parsing.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// Longest prefix length an IPv6 prefix can carry.
pub const IPV6_MAX_PREFIX_LEN: u8 = 128;

/// An IPv6 address wrapper with routing-specific utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ipv6Address(Ipv6Addr);

impl Ipv6Address {
    pub const UNSPECIFIED: Self = Ipv6Address(Ipv6Addr::UNSPECIFIED);
    pub const LOCALHOST: Self = Ipv6Address(Ipv6Addr::LOCALHOST);

    #[allow(clippy::too_many_arguments)]
    pub const fn new(a: u16, b: u16, c: u16, d: u16, e: u16, f: u16, g: u16, h: u16) -> Self {
        Ipv6Address(Ipv6Addr::new(a, b, c, d, e, f, g, h))
    }

    pub fn from_octets(octets: [u8; 16]) -> Self {
        Ipv6Address(Ipv6Addr::from(octets))
    }

    pub const fn inner(&self) -> Ipv6Addr {
        self.0
    }

    pub const fn octets(&self) -> [u8; 16] {
        self.0.octets()
    }

    pub const fn segments(&self) -> [u16; 8] {
        self.0.segments()
    }

    /// Returns true if this is the all-zero address (`::`).
    pub const fn is_unspecified(&self) -> bool {
        self.0.is_unspecified()
    }

    /// Returns true if this is a link-local address (fe80::/10).
    pub fn is_link_local(&self) -> bool {
        let segments = self.segments();
        (segments[0] & 0xffc0) == 0xfe80
    }
}

impl fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Ipv6Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Ipv6Addr>()
            .map(Ipv6Address)
            .map_err(|_| ParseError::InvalidIpAddress(s.to_string()))
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    fn from(addr: Ipv6Addr) -> Self {
        Ipv6Address(addr)
    }
}

impl From<Ipv6Address> for Ipv6Addr {
    fn from(addr: Ipv6Address) -> Self {
        addr.0
    }
}

impl From<[u8; 16]> for Ipv6Address {
    fn from(octets: [u8; 16]) -> Self {
        Ipv6Address::from_octets(octets)
    }
}

/// An IPv6 prefix in CIDR notation (e.g., `2001:db8::/32`).
///
/// Comparisons against addresses and other prefixes only look at whole
/// bytes: a `/36` prefix behaves like a `/32` one when matched. Host bits
/// beyond the prefix length are kept as given and are never masked.
///
/// # Examples
///
/// ```
/// use ip6_types::{Ipv6Address, Ipv6Prefix};
///
/// let prefix: Ipv6Prefix = "2001:db8::/32".parse().unwrap();
/// let dest: Ipv6Address = "2001:db8:1::1".parse().unwrap();
/// assert!(prefix.matches(&dest));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ipv6Prefix {
    address: Ipv6Address,
    prefix_len: u8,
}

impl Ipv6Prefix {
    /// The zero prefix `::/0`.
    pub const UNSPECIFIED: Self = Ipv6Prefix {
        address: Ipv6Address::UNSPECIFIED,
        prefix_len: 0,
    };

    /// Creates a new IPv6 prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix length exceeds 128.
    pub fn new(address: Ipv6Address, prefix_len: u8) -> Result<Self, ParseError> {
        if prefix_len > IPV6_MAX_PREFIX_LEN {
            return Err(ParseError::InvalidIpPrefix(format!(
                "prefix length {} exceeds maximum {}",
                prefix_len, IPV6_MAX_PREFIX_LEN
            )));
        }

        Ok(Ipv6Prefix {
            address,
            prefix_len,
        })
    }

    /// Returns the network address of this prefix.
    pub const fn address(&self) -> &Ipv6Address {
        &self.address
    }

    /// Returns the prefix length in bits.
    pub const fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Number of leading address bytes that take part in matching.
    pub const fn significant_bytes(&self) -> usize {
        (self.prefix_len / 8) as usize
    }

    /// Returns true if this is a host route (/128).
    pub const fn is_host_route(&self) -> bool {
        self.prefix_len == IPV6_MAX_PREFIX_LEN
    }

    /// Returns true if this is the default route (::/0).
    pub const fn is_default(&self) -> bool {
        self.prefix_len == 0
    }

    /// Returns true if `addr` falls under this prefix.
    ///
    /// Only the first [`significant_bytes`](Self::significant_bytes) bytes
    /// are compared; a trailing partial byte is ignored.
    pub fn matches(&self, addr: &Ipv6Address) -> bool {
        let n = self.significant_bytes();
        self.address.octets()[..n] == addr.octets()[..n]
    }

    /// Returns true if both prefixes identify the same route: equal lengths
    /// and equal significant bytes.
    pub fn same_key(&self, other: &Ipv6Prefix) -> bool {
        self.prefix_len == other.prefix_len && self.matches(&other.address)
    }
}

impl Default for Ipv6Prefix {
    fn default() -> Self {
        Self::UNSPECIFIED
    }
}

impl fmt::Display for Ipv6Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len)
    }
}

impl FromStr for Ipv6Prefix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr_str, len_str) = s
            .rsplit_once('/')
            .ok_or_else(|| ParseError::InvalidIpPrefix(s.to_string()))?;

        let address: Ipv6Address = addr_str.parse()?;
        let prefix_len: u8 = len_str
            .parse()
            .map_err(|_| ParseError::InvalidIpPrefix(s.to_string()))?;

        Ipv6Prefix::new(address, prefix_len)
    }
}

impl TryFrom<String> for Ipv6Prefix {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Ipv6Prefix> for String {
    fn from(prefix: Ipv6Prefix) -> String {
        prefix.to_string()
    }
}
