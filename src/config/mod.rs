//! Configuration for container construction
//!
//! Consumers pick the backing structure and its initial sizing through a
//! [`ContainerConfig`] instead of hard-coding a concrete type.
//!
//! # Configuration Traits
//!
//! The [`Config`] trait provides validation, environment initialization,
//! presets and JSON persistence for every configuration type.
//!
//! # Preset Configurations
//!
//! ```rust
//! use soas_containers::config::{Config, ContainerConfig};
//!
//! // Large initial buffers, fewer doublings
//! let config = ContainerConfig::performance_preset();
//!
//! // Small initial buffers
//! let config = ContainerConfig::memory_preset();
//! ```
//!
//! # Environment Initialization
//!
//! ```rust
//! use soas_containers::config::{Config, ContainerConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads SOAS_CONTAINER_KIND and SOAS_CONTAINER_INITIAL_CAPACITY
//! let config = ContainerConfig::from_env()?;
//!
//! // Custom prefix: MYAPP_CONTAINER_KIND, ...
//! let config = ContainerConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod container;

#[cfg(test)]
mod tests;

pub use container::ContainerConfig;

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables with the `SOAS_` prefix.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix("SOAS_")
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// Unset or unparsable variables fall back to the default value.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset favoring throughput over memory.
    fn performance_preset() -> Self;

    /// Preset favoring a small footprint.
    fn memory_preset() -> Self;

    /// Preset favoring predictable latency.
    fn realtime_preset() -> Self;

    /// Balanced preset; the default.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a file as pretty JSON.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse environment variable with fallback to default.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
