//! Configuration file parsing for clusternet
//!
//! Parses `clusternet.toml` configuration files using serde. Every field
//! has a default, so running without a file is equivalent to an empty one.

use crate::error::{Error, Result};
use crate::network::DEFAULT_NETWORK_NAME;
use crate::runtime::DEFAULT_RUNTIME;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Load configuration from a file
pub fn load(path: &Path) -> Result<ClusternetConfig> {
    let content = fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content)
}

/// Load configuration from an optional file, falling back to defaults
pub fn load_or_default(path: Option<&Path>) -> Result<ClusternetConfig> {
    match path {
        Some(path) => load(path),
        None => Ok(ClusternetConfig::default()),
    }
}

fn parse(content: &str) -> Result<ClusternetConfig> {
    let config: ClusternetConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Root configuration structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusternetConfig {
    /// Cluster network settings
    #[serde(default)]
    pub network: NetworkConfig,

    /// Container runtime settings
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

impl ClusternetConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.network.name.trim().is_empty() {
            return Err(Error::ConfigValidation(
                "network.name must not be empty".into(),
            ));
        }

        if self.runtime.command.trim().is_empty() {
            return Err(Error::ConfigValidation(
                "runtime.command must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(mut self, network: Option<String>, runtime: Option<String>) -> Result<Self> {
        if let Some(name) = network {
            self.network.name = name;
        }
        if let Some(command) = runtime {
            self.runtime.command = command;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Cluster network settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    /// Name of the shared network all cluster nodes join
    #[serde(default = "default_network_name")]
    pub name: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: default_network_name(),
        }
    }
}

/// Container runtime settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Runtime binary (docker, podman, nerdctl...)
    #[serde(default = "default_runtime_command")]
    pub command: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command: default_runtime_command(),
        }
    }
}

fn default_network_name() -> String {
    DEFAULT_NETWORK_NAME.to_string()
}

fn default_runtime_command() -> String {
    DEFAULT_RUNTIME.to_string()
}
