//! Error types for route table operations.

use thiserror::Error;

/// Result type alias for route table operations.
pub type Result<T> = std::result::Result<T, RouteError>;

/// Errors reported by [`StaticRouteTable`](crate::StaticRouteTable) mutations.
///
/// Lookups never fail: a destination without a route is `None`. Removal of
/// an absent prefix is a no-op rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Prefix length rejected by the table's prefix rules, or no interface given.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Every slot is occupied and the prefix does not replace an existing route.
    #[error("Route table full ({capacity} entries)")]
    TableFull {
        /// Number of slots in the table.
        capacity: usize,
    },

    /// Table configuration failed validation.
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfig {
        /// The field that failed validation.
        field: String,
        /// Error message.
        message: String,
    },
}

impl RouteError {
    /// Returns true if the table ran out of slots.
    pub fn is_table_full(&self) -> bool {
        matches!(self, RouteError::TableFull { .. })
    }
}
