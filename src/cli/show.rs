//! Show command implementation

use std::path::Path;

use anyhow::Result;
use clap::{Args, ValueEnum};
use tracing::info;

use crate::config::{Config, CONFIG_FILE};

/// Output format for `show`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

/// Print the descriptor
#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: Format,

    /// Turn off live reload
    #[arg(long)]
    pub no_refresh: bool,
}

impl ShowCommand {
    /// Print the descriptor from `config_path`.
    ///
    /// Without an explicit path, a missing `bundle.toml` falls back to the
    /// built-in descriptor. An explicit path must exist.
    pub fn execute(&self, config_path: Option<&str>) -> Result<()> {
        let config = match config_path {
            Some(path) => {
                info!("Loading configuration from {}", path);
                Config::load(path)?.config
            }
            None if Path::new(CONFIG_FILE).exists() => {
                info!("Loading configuration from {}", CONFIG_FILE);
                Config::load(CONFIG_FILE)?.config
            }
            None => {
                info!("{} not found, using the built-in descriptor", CONFIG_FILE);
                Config::canonical()
            }
        };

        let config = if self.no_refresh {
            config.with_refresh(false)
        } else {
            config
        };

        let rendered = match self.format {
            Format::Toml => config.to_toml_string()?,
            Format::Json => config.to_json_string()?,
        };
        println!("{}", rendered.trim_end());

        Ok(())
    }
}
