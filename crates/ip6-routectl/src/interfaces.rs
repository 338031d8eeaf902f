//! Interface names and the handles stored in the route table.

use crate::error::{Result, RoutectlError};
use serde::Serialize;
use std::fmt;

/// Compact interface handle: the position of the interface in the
/// `interfaces` list of the routes file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct InterfaceId(u8);

impl InterfaceId {
    pub const fn new(index: u8) -> Self {
        InterfaceId(index)
    }

    pub const fn index(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if{}", self.0)
    }
}

/// Maps interface names to [`InterfaceId`]s and back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceRegistry {
    names: Vec<String>,
}

impl InterfaceRegistry {
    /// Builds a registry; handles are assigned in list order.
    ///
    /// # Errors
    ///
    /// Fails on empty or duplicate names, or more names than handles.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        if names.len() > usize::from(u8::MAX) + 1 {
            return Err(RoutectlError::Configuration(format!(
                "too many interfaces ({}, at most 256)",
                names.len()
            )));
        }

        let mut registry = Self::default();
        for name in names {
            let name = name.as_ref();
            if name.is_empty() {
                return Err(RoutectlError::Configuration(
                    "interface name cannot be empty".to_string(),
                ));
            }
            if registry.id(name).is_some() {
                return Err(RoutectlError::Configuration(format!(
                    "duplicate interface '{}'",
                    name
                )));
            }
            registry.names.push(name.to_string());
        }
        Ok(registry)
    }

    pub fn id(&self, name: &str) -> Option<InterfaceId> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|i| u8::try_from(i).ok())
            .map(InterfaceId)
    }

    pub fn name(&self, id: InterfaceId) -> Option<&str> {
        self.names.get(usize::from(id.0)).map(String::as_str)
    }

    /// Name for display, falling back to the handle for unknown ids.
    pub fn display_name(&self, id: InterfaceId) -> String {
        self.name(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
