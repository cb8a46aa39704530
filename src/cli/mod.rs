//! Command-line interface for bundlecfg
//!
//! Provides the main CLI structure using clap with subcommands for:
//! - `init`: Write the canonical `bundle.toml`
//! - `show`: Print the descriptor as TOML or JSON
//! - `check`: Report what the bundler would reject at startup

mod check;
mod init;
mod show;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use check::CheckCommand;
pub use init::InitCommand;
pub use show::{Format, ShowCommand};

use crate::config::CONFIG_FILE;

/// Typed build configuration for the Vue + Tailwind + ColdBox asset pipeline
#[derive(Parser, Debug)]
#[command(name = "bundlecfg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file [default: bundle.toml]
    #[arg(short, long, global = true, env = "BUNDLECFG_CONFIG")]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the canonical descriptor to bundle.toml
    Init(InitCommand),

    /// Print the descriptor
    Show(ShowCommand),

    /// Check the descriptor against the project on disk
    Check(CheckCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.execute(),
            Commands::Show(cmd) => cmd.execute(self.config.as_deref()),
            Commands::Check(cmd) => {
                cmd.execute(self.config.as_deref().unwrap_or(CONFIG_FILE))
            }
        }
    }
}
