//! Container selection configuration

use super::{parse_env_var, Config};
use crate::containers::{ContainerKind, DataContainer, DEFAULT_CAPACITY};
use crate::error::{ContainerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which structure backs a container, and how large its first buffer is
///
/// `initial_capacity` only affects the array-backed kinds; the linked kinds
/// allocate per element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// Backing structure
    pub kind: ContainerKind,
    /// Slots allocated up front by array-backed kinds
    pub initial_capacity: usize,
}

impl ContainerConfig {
    /// Configuration for `kind` with the default capacity
    pub fn for_kind(kind: ContainerKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Build an empty container as configured
    pub fn create<T>(&self) -> Result<Box<dyn DataContainer<T>>>
    where
        T: Ord + 'static,
    {
        self.validate()?;
        self.kind.create_with_config(self)
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            kind: ContainerKind::DynamicArray,
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Config for ContainerConfig {
    fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(ContainerError::configuration(
                "initial_capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.kind = parse_env_var(&format!("{}CONTAINER_KIND", prefix), config.kind);
        config.initial_capacity = parse_env_var(
            &format!("{}CONTAINER_INITIAL_CAPACITY", prefix),
            config.initial_capacity,
        );
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            kind: ContainerKind::DynamicArray,
            initial_capacity: 1024,
        }
    }

    fn memory_preset() -> Self {
        Self {
            kind: ContainerKind::DynamicArray,
            initial_capacity: 4,
        }
    }

    fn realtime_preset() -> Self {
        Self {
            kind: ContainerKind::DynamicArray,
            initial_capacity: 256,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            ContainerError::configuration(format!("Failed to serialize container config: {}", e))
        })?;
        std::fs::write(path, serialized).map_err(|e| {
            ContainerError::configuration(format!("Failed to write container config file: {}", e))
        })?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ContainerError::configuration(format!("Failed to read container config file: {}", e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ContainerError::configuration(format!("Failed to parse container config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
