//! bundlecfg library
//!
//! Typed build configuration descriptor: an ordered list of plugin
//! activations for the Vue + Tailwind + ColdBox asset pipeline.

pub mod cli;
pub mod config;

pub use cli::Cli;
pub use config::{Config, LoadedConfig, PluginActivation};
