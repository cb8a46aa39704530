//! Build configuration descriptor
//!
//! Holds the ordered plugin activations handed to the bundler runtime, and
//! reads/writes them as `bundle.toml` or JSON.

mod check;
mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use check::{check, Problem};
pub use schema::*;

/// Default configuration file name
pub const CONFIG_FILE: &str = "bundle.toml";

/// The configuration object read by the bundler runtime at startup.
///
/// Immutable once built; [`Config::with_refresh`] returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    plugins: Vec<PluginActivation>,
}

impl Default for Config {
    fn default() -> Self {
        Self::canonical()
    }
}

impl Config {
    /// Build a descriptor from activations, keeping declaration order
    pub fn new(plugins: Vec<PluginActivation>) -> Self {
        Self { plugins }
    }

    /// The Vue + Tailwind + ColdBox descriptor
    pub fn canonical() -> Self {
        Self::new(vec![
            PluginActivation::Vue,
            PluginActivation::Tailwindcss,
            PluginActivation::Coldbox(ColdboxOptions::default()),
        ])
    }

    /// Plugin activations in declaration order
    pub fn plugins(&self) -> &[PluginActivation] {
        &self.plugins
    }

    /// Options of the first ColdBox activation, if any
    pub fn coldbox(&self) -> Option<&ColdboxOptions> {
        self.plugins.iter().find_map(|plugin| match plugin {
            PluginActivation::Coldbox(options) => Some(options),
            _ => None,
        })
    }

    /// Return a copy with every ColdBox `refresh` flag set to `refresh`
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        for plugin in &mut self.plugins {
            if let PluginActivation::Coldbox(options) = plugin {
                options.refresh = refresh;
            }
        }
        self
    }

    /// Parse a descriptor from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse bundle configuration")
    }

    /// Render the descriptor as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize bundle configuration")
    }

    /// Parse a descriptor from JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse bundle configuration JSON")
    }

    /// Render the descriptor as pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .context("Failed to serialize bundle configuration as JSON")
    }

    /// Load configuration from a file path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<LoadedConfig> {
        let path = path.as_ref();
        let canonical_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };

        let content = fs::read_to_string(&canonical_path)
            .with_context(|| format!("Failed to read config file: {}", canonical_path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", canonical_path.display()))?;

        // Paths inside the descriptor are relative to the file's directory
        let root = canonical_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        debug!(
            "Loaded {} plugin activation(s) from {}",
            config.plugins.len(),
            canonical_path.display()
        );

        Ok(LoadedConfig { config, root })
    }
}

/// A descriptor together with the project root it was loaded from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub root: PathBuf,
}

impl LoadedConfig {
    /// Run startup checks against the project root
    pub fn check(&self) -> Vec<Problem> {
        check(&self.config, &self.root)
    }
}
